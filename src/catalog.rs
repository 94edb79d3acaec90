/*!
# HTAttrs: Attribute Catalog.
*/

use indexmap::IndexMap;
use std::sync::LazyLock;



/// # The "Any Element" Tag.
///
/// The catalog files its global attributes under this sentinel tag.
pub(crate) const STAR: &str = "*";

/// # Global Attributes.
///
/// Attributes that are legal on every element, no questions asked.
static GLOBAL_ATTRIBUTES: &[&str] = &[
	"accesskey",
	"autocapitalize",
	"class",
	"contenteditable",
	"dir",
	"draggable",
	"enterkeyhint",
	"hidden",
	"id",
	"inputmode",
	"is",
	"itemid",
	"itemprop",
	"itemref",
	"itemscope",
	"itemtype",
	"lang",
	"nonce",
	"slot",
	"spellcheck",
	"style",
	"tabindex",
	"title",
	"translate",
];

/// # Element Attribute Catalog.
///
/// The ground-truth table: each element tag, paired with its own
/// element-specific attributes, with the global set filed first under
/// [`STAR`].
///
/// Templates in the wild are full of markup that went out of fashion
/// decades ago, so legacy elements and attributes (`<applet>`, `bgcolor`,
/// `frameborder`, and friends) are retained alongside their modern
/// counterparts. Better to wave through an `<hr noshade>` than to reject a
/// page that (still) renders fine.
///
/// Tags are sorted and unique; each row's attributes are likewise sorted
/// and unique. (The tests will complain otherwise.)
pub(crate) static CATALOG: &[(&str, &[&str])] = &[
	(STAR, GLOBAL_ATTRIBUTES),
	("a", &[
		"accesskey",
		"charset",
		"coords",
		"download",
		"href",
		"hreflang",
		"name",
		"ping",
		"referrerpolicy",
		"rel",
		"rev",
		"shape",
		"tabindex",
		"target",
		"type",
	]),
	("abbr", &["title"]),
	("applet", &[
		"align",
		"alt",
		"archive",
		"code",
		"codebase",
		"height",
		"hspace",
		"name",
		"object",
		"vspace",
		"width",
	]),
	("area", &[
		"accesskey",
		"alt",
		"coords",
		"download",
		"href",
		"hreflang",
		"nohref",
		"ping",
		"referrerpolicy",
		"rel",
		"shape",
		"tabindex",
		"target",
		"type",
	]),
	("audio", &["autoplay", "controls", "crossorigin", "loop", "muted", "preload", "src"]),
	("base", &["href", "target"]),
	("basefont", &["color", "face", "size"]),
	("bdo", &["dir"]),
	("blockquote", &["cite"]),
	("body", &["alink", "background", "bgcolor", "link", "text", "vlink"]),
	("br", &["clear"]),
	("button", &[
		"accesskey",
		"autofocus",
		"disabled",
		"form",
		"formaction",
		"formenctype",
		"formmethod",
		"formnovalidate",
		"formtarget",
		"name",
		"tabindex",
		"type",
		"value",
	]),
	("canvas", &["height", "width"]),
	("caption", &["align"]),
	("col", &["align", "char", "charoff", "span", "valign", "width"]),
	("colgroup", &["align", "char", "charoff", "span", "valign", "width"]),
	("data", &["value"]),
	("del", &["cite", "datetime"]),
	("details", &["open"]),
	("dfn", &["title"]),
	("dialog", &["open"]),
	("dir", &["compact"]),
	("div", &["align"]),
	("dl", &["compact"]),
	("embed", &["height", "src", "type", "width"]),
	("fieldset", &["disabled", "form", "name"]),
	("font", &["color", "face", "size"]),
	("form", &[
		"accept",
		"accept-charset",
		"action",
		"autocomplete",
		"enctype",
		"method",
		"name",
		"novalidate",
		"target",
	]),
	("frame", &[
		"frameborder",
		"longdesc",
		"marginheight",
		"marginwidth",
		"name",
		"noresize",
		"scrolling",
		"src",
	]),
	("frameset", &["cols", "rows"]),
	("h1", &["align"]),
	("h2", &["align"]),
	("h3", &["align"]),
	("h4", &["align"]),
	("h5", &["align"]),
	("h6", &["align"]),
	("head", &["profile"]),
	("hr", &["align", "noshade", "size", "width"]),
	("html", &["manifest", "version"]),
	("iframe", &[
		"align",
		"allow",
		"allowfullscreen",
		"allowpaymentrequest",
		"allowusermedia",
		"frameborder",
		"height",
		"longdesc",
		"marginheight",
		"marginwidth",
		"name",
		"referrerpolicy",
		"sandbox",
		"scrolling",
		"src",
		"srcdoc",
		"width",
	]),
	("img", &[
		"align",
		"alt",
		"border",
		"crossorigin",
		"decoding",
		"height",
		"hspace",
		"ismap",
		"longdesc",
		"name",
		"referrerpolicy",
		"sizes",
		"src",
		"srcset",
		"usemap",
		"vspace",
		"width",
	]),
	("input", &[
		"accept",
		"accesskey",
		"align",
		"alt",
		"autocomplete",
		"autofocus",
		"checked",
		"dirname",
		"disabled",
		"form",
		"formaction",
		"formenctype",
		"formmethod",
		"formnovalidate",
		"formtarget",
		"height",
		"ismap",
		"list",
		"max",
		"maxlength",
		"min",
		"minlength",
		"multiple",
		"name",
		"pattern",
		"placeholder",
		"readonly",
		"required",
		"size",
		"src",
		"step",
		"tabindex",
		"title",
		"type",
		"usemap",
		"value",
		"width",
	]),
	("ins", &["cite", "datetime"]),
	("isindex", &["prompt"]),
	("label", &["accesskey", "for", "form"]),
	("legend", &["accesskey", "align"]),
	("li", &["type", "value"]),
	("link", &[
		"as",
		"charset",
		"color",
		"crossorigin",
		"href",
		"hreflang",
		"imagesizes",
		"imagesrcset",
		"integrity",
		"media",
		"nonce",
		"referrerpolicy",
		"rel",
		"rev",
		"sizes",
		"target",
		"title",
		"type",
	]),
	("map", &["name"]),
	("menu", &["compact"]),
	("meta", &["charset", "content", "http-equiv", "name", "scheme"]),
	("meter", &["high", "low", "max", "min", "optimum", "value"]),
	("object", &[
		"align",
		"archive",
		"border",
		"classid",
		"codebase",
		"codetype",
		"data",
		"declare",
		"form",
		"height",
		"hspace",
		"name",
		"standby",
		"tabindex",
		"type",
		"typemustmatch",
		"usemap",
		"vspace",
		"width",
	]),
	("ol", &["compact", "reversed", "start", "type"]),
	("optgroup", &["disabled", "label"]),
	("option", &["disabled", "label", "selected", "value"]),
	("output", &["for", "form", "name"]),
	("p", &["align"]),
	("param", &["name", "type", "value", "valuetype"]),
	("pre", &["width"]),
	("progress", &["max", "value"]),
	("q", &["cite"]),
	("script", &[
		"async",
		"charset",
		"crossorigin",
		"defer",
		"integrity",
		"language",
		"nomodule",
		"nonce",
		"referrerpolicy",
		"src",
		"type",
	]),
	("select", &[
		"autocomplete",
		"autofocus",
		"disabled",
		"form",
		"multiple",
		"name",
		"required",
		"size",
		"tabindex",
	]),
	("slot", &["name"]),
	("source", &["media", "sizes", "src", "srcset", "type"]),
	("style", &["media", "nonce", "title", "type"]),
	("table", &[
		"align",
		"bgcolor",
		"border",
		"cellpadding",
		"cellspacing",
		"frame",
		"rules",
		"summary",
		"width",
	]),
	("tbody", &["align", "char", "charoff", "valign"]),
	("td", &[
		"abbr",
		"align",
		"axis",
		"bgcolor",
		"char",
		"charoff",
		"colspan",
		"headers",
		"height",
		"nowrap",
		"rowspan",
		"scope",
		"valign",
		"width",
	]),
	("textarea", &[
		"accesskey",
		"autocomplete",
		"autofocus",
		"cols",
		"dirname",
		"disabled",
		"form",
		"maxlength",
		"minlength",
		"name",
		"placeholder",
		"readonly",
		"required",
		"rows",
		"tabindex",
		"wrap",
	]),
	("tfoot", &["align", "char", "charoff", "valign"]),
	("th", &[
		"abbr",
		"align",
		"axis",
		"bgcolor",
		"char",
		"charoff",
		"colspan",
		"headers",
		"height",
		"nowrap",
		"rowspan",
		"scope",
		"valign",
		"width",
	]),
	("thead", &["align", "char", "charoff", "valign"]),
	("time", &["datetime"]),
	("tr", &["align", "bgcolor", "char", "charoff", "valign"]),
	("track", &["default", "kind", "label", "src", "srclang"]),
	("ul", &["compact", "type"]),
	("video", &[
		"autoplay",
		"controls",
		"crossorigin",
		"height",
		"loop",
		"muted",
		"playsinline",
		"poster",
		"preload",
		"src",
		"width",
	]),
];

/// # Keyed Catalog.
static ELEMENT_MAP: LazyLock<IndexMap<&'static str, &'static [&'static str]>> =
	LazyLock::new(|| CATALOG.iter().copied().collect());



#[must_use]
/// # Element Attributes.
///
/// Return the element-specific attributes for a given (lowercase) tag, the
/// global set if asked about `*`, or `None` if the tag is a mystery.
///
/// Note the list covers only the attributes _particular_ to the element;
/// global attributes apply on top of it. See [`can_have_attribute`](crate::can_have_attribute)
/// if that is the question being asked.
pub fn element_attributes(tag: &str) -> Option<&'static [&'static str]> {
	ELEMENT_MAP.get(tag).copied()
}

#[must_use]
/// # Global Attributes.
///
/// Return the attributes that are legal on any element whatsoever.
pub fn global_attributes() -> &'static [&'static str] { GLOBAL_ATTRIBUTES }



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_ordered() {
		// Tags must be sorted and unique, ditto each row's attributes.
		for pair in CATALOG.windows(2) {
			assert!(
				pair[0].0 < pair[1].0,
				"Catalog tags out of order: {:?} >= {:?}.", pair[0].0, pair[1].0,
			);
		}

		for (tag, attrs) in CATALOG {
			for pair in attrs.windows(2) {
				assert!(
					pair[0] < pair[1],
					"Catalog attributes out of order for {tag:?}: {:?} >= {:?}.",
					pair[0], pair[1],
				);
			}
		}
	}

	#[test]
	fn t_lowercase() {
		for (tag, attrs) in CATALOG {
			for name in std::iter::once(tag).chain(attrs.iter()) {
				assert!(
					name.bytes().all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'*')),
					"Unexpected character in {name:?}.",
				);
			}
		}
	}

	#[test]
	fn t_element_attributes() {
		let a = element_attributes("a").expect("Missing <a> entry.");
		assert!(a.contains(&"href"));
		assert!(a.contains(&"target"));
		assert!(a.contains(&"download"));
		assert!(! a.contains(&"disabled"));

		let button = element_attributes("button").expect("Missing <button> entry.");
		assert!(button.contains(&"disabled"));
		assert!(button.contains(&"type"));
		assert!(button.contains(&"formaction"));
		assert!(! button.contains(&"href"));

		assert_eq!(element_attributes(STAR), Some(GLOBAL_ATTRIBUTES));
		assert_eq!(element_attributes("unknown-tag"), None);
		assert_eq!(element_attributes(""), None);
	}
}
