/*!
# HTAttrs

`HTAttrs` is a static knowledge base of which HTML attributes belong on
which HTML elements, intended for template compilers that want to validate
markup at build time: flag a `href` on a `<button>`, wave through a `class`
on anything at all.

The tables were curated from the HTML specification with a permissive eye.
Real-world templates still emit `bgcolor`, `frameborder`, `<applet>`, and
other relics, and a compile-time validator that rejects working legacy
markup is worse than useless, so the legacy entries stay.

Everything is plain data. Construction cannot fail, lookups cannot fail
(they just come back empty-handed), and the derived index is built exactly
once, on first use, then shared freely across however many threads the
surrounding compiler cares to throw at it.

## Use

Lookups speak lowercase strings:

```
// Which attributes are particular to <a>?
let attrs = htattrs::element_attributes("a").unwrap();
assert!(attrs.contains(&"href"));

// Which elements accept "href"? (Empty would mean "all of them".)
assert_eq!(
    htattrs::attribute_elements("href"),
    Some(&["a", "area", "base", "link"][..]),
);

// Or just ask the question directly.
assert!(htattrs::can_have_attribute("a", "href"));
assert!(! htattrs::can_have_attribute("button", "href"));
assert!(htattrs::can_have_attribute("button", "class")); // Global.
```

Compilers holding parsed [`html5ever`] names can skip the string wrangling:

```
use html5ever::{LocalName, QualName, ns, namespace_url};

let tag = QualName::new(None, ns!(html), LocalName::from("img"));
let attr = QualName::new(None, ns!(), LocalName::from("srcset"));
assert!(htattrs::is_valid_attribute(&tag, &attr));
```

## Scope

Attribute _names_ only. Value syntax, SVG/MathML namespace rules, ARIA
attributes, and deprecation nagging are all somebody else's department.
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]
#![allow(unused_crate_dependencies)]



mod catalog;
mod index;
mod spec;

pub use catalog::{
	element_attributes,
	global_attributes,
};
pub use index::{
	attribute_elements,
	is_global_attribute,
};
pub use spec::{
	can_have_attribute,
	is_boolean_attribute,
	is_valid_attribute,
	is_void_element,
};
