/*!
# HTAttrs: Reverse Index.
*/

use crate::catalog::{
	self,
	STAR,
};
use indexmap::IndexMap;
use std::sync::LazyLock;



/// # Reverse Index.
///
/// Attribute name → element tags that specifically claim it, built once on
/// first touch and read-only ever after.
static ATTRIBUTE_MAP: LazyLock<IndexMap<&'static str, Vec<&'static str>>> =
	LazyLock::new(build);

/// # Build the Reverse Index.
///
/// Walk the element rows of the catalog, crediting each attribute with the
/// tags that declare it, then stamp out the global attributes last. An
/// empty tag list encodes "legal everywhere", so globals unconditionally
/// clobber whatever element rows may have piled up under the same name.
fn build() -> IndexMap<&'static str, Vec<&'static str>> {
	let mut out: IndexMap<&'static str, Vec<&'static str>> = IndexMap::new();

	for &(tag, attrs) in catalog::CATALOG {
		if tag == STAR { continue; }
		for &attr in attrs {
			out.entry(attr).or_insert_with(Vec::new).push(tag);
		}
	}

	for &attr in catalog::global_attributes() {
		out.insert(attr, Vec::new());
	}

	out
}



#[must_use]
/// # Attribute Elements.
///
/// Return the element tags that specifically support a given (lowercase)
/// attribute, in catalog order.
///
/// An empty (but present) slice means the attribute is global: legal on
/// every element, nothing to gate on. `None` means the attribute isn't in
/// any of the tables; what to make of _that_ is the caller's business.
pub fn attribute_elements(attr: &str) -> Option<&'static [&'static str]> {
	ATTRIBUTE_MAP.get(attr).map(Vec::as_slice)
}

#[must_use]
/// # Is Global Attribute?
///
/// Returns `true` if the attribute is legal on every element.
pub fn is_global_attribute(attr: &str) -> bool {
	attribute_elements(attr).is_some_and(|tags| tags.is_empty())
}
