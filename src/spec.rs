/*!
# HTAttrs: Questions of Spec.
*/

use crate::index;
use html5ever::{
	QualName,
	ns,
	namespace_url,
};



#[must_use]
/// # Can Have Attribute?
///
/// The question a template compiler actually wants answered: is this
/// (lowercase) attribute legal on this (lowercase) tag?
///
/// Global attributes are legal on anything, even tags the tables have
/// never heard of; custom elements carry a `class` as well as anybody.
/// Everything else has to be on the tag's own list. Attributes missing
/// from the tables entirely come back `false`; callers wanting to treat
/// "unknown" differently from "misplaced" should consult
/// [`attribute_elements`](crate::attribute_elements) directly.
pub fn can_have_attribute(tag: &str, attr: &str) -> bool {
	match index::attribute_elements(attr) {
		Some([]) => true,
		Some(tags) => tags.iter().any(|&t| t == tag),
		None => false,
	}
}

#[must_use]
/// # Is Valid Attribute?
///
/// Same question as [`can_have_attribute`], but for callers holding parsed
/// names. Only HTML-namespaced elements are in scope (the tables have
/// nothing to say about SVG or MathML), and the attribute itself must be
/// un-namespaced, as ordinary markup attributes are.
pub fn is_valid_attribute(tag: &QualName, attr: &QualName) -> bool {
	matches!(tag.ns, ns!(html)) &&
	attr.ns == ns!() &&
	can_have_attribute(&tag.local, &attr.local)
}

#[must_use]
/// # Is Void Element?
///
/// Void elements have no closing tag and no children, ever.
pub fn is_void_element(tag: &str) -> bool {
	matches!(
		tag,
		"area" | "base" | "basefont" | "bgsound" | "br" | "col" | "embed" |
		"frame" | "hr" | "img" | "input" | "keygen" | "link" | "meta" |
		"param" | "source" | "track" | "wbr"
	)
}

#[must_use]
/// # Is Boolean Attribute?
///
/// These attributes either are or aren't. Their existence implies "true",
/// so any value beyond the name itself is noise.
pub fn is_boolean_attribute(attr: &str) -> bool {
	matches!(
		attr,
		"allowfullscreen" | "async" | "autofocus" | "autoplay" | "checked" |
		"compact" | "controls" | "declare" | "default" | "defer" |
		"disabled" | "formnovalidate" | "hidden" | "ismap" | "itemscope" |
		"loop" | "multiple" | "muted" | "nohref" | "nomodule" | "noresize" |
		"noshade" | "novalidate" | "nowrap" | "open" | "playsinline" |
		"readonly" | "required" | "scoped" | "seamless" | "selected"
	)
}



#[cfg(test)]
mod tests {
	use super::*;
	use html5ever::LocalName;

	#[test]
	fn t_can_have_attribute() {
		for (tag, attr, expected) in [
			("a", "href", true),
			("a", "download", true),
			("a", "disabled", false),
			("button", "disabled", true),
			("button", "formaction", true),
			("button", "href", false),
			("div", "align", true),
			("div", "frameborder", false),
			("td", "colspan", true),
			// Globals pass everywhere, known tag or not.
			("a", "class", true),
			("video", "id", true),
			("my-custom-tag", "class", true),
			// Unknown attributes pass nowhere.
			("my-custom-tag", "href", false),
			("a", "hrefs", false),
			("a", "", false),
		] {
			assert_eq!(
				can_have_attribute(tag, attr),
				expected,
				"can_have_attribute({tag:?}, {attr:?})",
			);
		}
	}

	#[test]
	fn t_valid_attribute() {
		let tag_a = QualName::new(None, ns!(html), LocalName::from("a"));
		let tag_svg_a = QualName::new(None, ns!(svg), LocalName::from("a"));
		let href = QualName::new(None, ns!(), LocalName::from("href"));
		let class = QualName::new(None, ns!(), LocalName::from("class"));
		let xlink_href = QualName::new(None, ns!(xlink), LocalName::from("href"));

		assert!(is_valid_attribute(&tag_a, &href));
		assert!(is_valid_attribute(&tag_a, &class));

		// Foreign content is out of scope.
		assert!(! is_valid_attribute(&tag_svg_a, &href));

		// So are namespaced attributes.
		assert!(! is_valid_attribute(&tag_a, &xlink_href));
	}

	#[test]
	fn t_void() {
		for tag in ["area", "br", "hr", "img", "input", "link", "meta", "wbr"] {
			assert!(is_void_element(tag), "{tag:?} is void.");
		}

		// <iframe> requires a closing tag, whatever some minifiers think.
		for tag in ["a", "div", "iframe", "script", "textarea"] {
			assert!(! is_void_element(tag), "{tag:?} is not void.");
		}
	}

	#[test]
	fn t_boolean() {
		for attr in ["async", "checked", "disabled", "hidden", "selected"] {
			assert!(is_boolean_attribute(attr), "{attr:?} is boolean.");
		}

		for attr in ["class", "href", "type", "value"] {
			assert!(! is_boolean_attribute(attr), "{attr:?} is not boolean.");
		}
	}
}
