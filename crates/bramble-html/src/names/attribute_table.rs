// @generated by tools/gen_names.py. Do not edit by hand.

use bramble_dom::AttributeNamespace;

use super::attribute::{AttributeInfo, AttributeName};

/// Number of built-in attribute names. Custom names get ids from here up.
pub const BUILTIN_ATTRIBUTE_COUNT: u32 = 568;

/// Built-in attribute names, sorted by their HTML spelling (byte order).
pub(crate) static ATTRIBUTES: [AttributeInfo; 568] = [
    AttributeInfo::plain("abbr"),
    AttributeInfo::plain("accent"),
    AttributeInfo::plain("accent-height"),
    AttributeInfo::plain("accentunder"),
    AttributeInfo::plain("accept"),
    AttributeInfo::plain("accept-charset"),
    AttributeInfo::plain("accesskey"),
    AttributeInfo::plain("accumulate"),
    AttributeInfo::plain("action"),
    AttributeInfo::plain("actiontype"),
    AttributeInfo::plain("active").boolean().case_folded(),
    AttributeInfo::plain("additive"),
    AttributeInfo::plain("align").case_folded(),
    AttributeInfo::plain("alignment-baseline"),
    AttributeInfo::plain("alignmentscope"),
    AttributeInfo::plain("alink"),
    AttributeInfo::plain("alphabetic"),
    AttributeInfo::plain("alt"),
    AttributeInfo::plain("altimg"),
    AttributeInfo::plain("alttext"),
    AttributeInfo::plain("amplitude"),
    AttributeInfo::plain("arabic-form"),
    AttributeInfo::plain("archive"),
    AttributeInfo::plain("aria-activedescendant"),
    AttributeInfo::plain("aria-atomic"),
    AttributeInfo::plain("aria-autocomplete"),
    AttributeInfo::plain("aria-channel"),
    AttributeInfo::plain("aria-controls"),
    AttributeInfo::plain("aria-datatype"),
    AttributeInfo::plain("aria-describedby"),
    AttributeInfo::plain("aria-dropeffect"),
    AttributeInfo::plain("aria-flowto"),
    AttributeInfo::plain("aria-haspopup"),
    AttributeInfo::plain("aria-labelledby"),
    AttributeInfo::plain("aria-level"),
    AttributeInfo::plain("aria-live"),
    AttributeInfo::plain("aria-multiline"),
    AttributeInfo::plain("aria-multiselectable"),
    AttributeInfo::plain("aria-owns"),
    AttributeInfo::plain("aria-posinset"),
    AttributeInfo::plain("aria-readonly"),
    AttributeInfo::plain("aria-relevant"),
    AttributeInfo::plain("aria-required"),
    AttributeInfo::plain("aria-secret"),
    AttributeInfo::plain("aria-setsize"),
    AttributeInfo::plain("aria-sort"),
    AttributeInfo::plain("aria-templateid"),
    AttributeInfo::plain("aria-valuemax"),
    AttributeInfo::plain("aria-valuemin"),
    AttributeInfo::plain("aria-valuenow"),
    AttributeInfo::plain("ascent"),
    AttributeInfo::plain("async").boolean().case_folded(),
    AttributeInfo::svg_camel("attributename", "attributeName"),
    AttributeInfo::svg_camel("attributetype", "attributeType"),
    AttributeInfo::plain("autocomplete").case_folded(),
    AttributeInfo::plain("autofocus").boolean().case_folded(),
    AttributeInfo::plain("autosubmit").boolean().case_folded(),
    AttributeInfo::plain("axis"),
    AttributeInfo::plain("azimuth"),
    AttributeInfo::plain("background"),
    AttributeInfo::plain("base"),
    AttributeInfo::svg_camel("basefrequency", "baseFrequency"),
    AttributeInfo::plain("baseline"),
    AttributeInfo::plain("baseline-shift"),
    AttributeInfo::svg_camel("baseprofile", "baseProfile"),
    AttributeInfo::plain("bbox"),
    AttributeInfo::plain("begin"),
    AttributeInfo::plain("bevelled"),
    AttributeInfo::plain("bgcolor"),
    AttributeInfo::plain("bias"),
    AttributeInfo::plain("border"),
    AttributeInfo::plain("by"),
    AttributeInfo::svg_camel("calcmode", "calcMode"),
    AttributeInfo::plain("cap-height"),
    AttributeInfo::plain("cellpadding"),
    AttributeInfo::plain("cellspacing"),
    AttributeInfo::plain("char"),
    AttributeInfo::plain("charoff"),
    AttributeInfo::plain("charset"),
    AttributeInfo::plain("checked").boolean().case_folded(),
    AttributeInfo::plain("cite"),
    AttributeInfo::plain("class"),
    AttributeInfo::plain("classid"),
    AttributeInfo::plain("clear").case_folded(),
    AttributeInfo::plain("clip"),
    AttributeInfo::plain("clip-path"),
    AttributeInfo::plain("clip-rule"),
    AttributeInfo::svg_camel("clippathunits", "clipPathUnits"),
    AttributeInfo::plain("close"),
    AttributeInfo::plain("closure"),
    AttributeInfo::plain("code"),
    AttributeInfo::plain("codebase"),
    AttributeInfo::plain("codetype"),
    AttributeInfo::plain("color"),
    AttributeInfo::plain("color-interpolation"),
    AttributeInfo::plain("color-interpolation-filters"),
    AttributeInfo::plain("color-profile"),
    AttributeInfo::plain("color-rendering"),
    AttributeInfo::plain("cols"),
    AttributeInfo::plain("colspan"),
    AttributeInfo::plain("columnalign"),
    AttributeInfo::plain("columnlines"),
    AttributeInfo::plain("columnspacing"),
    AttributeInfo::plain("columnspan"),
    AttributeInfo::plain("columnwidth"),
    AttributeInfo::plain("compact").boolean().case_folded(),
    AttributeInfo::plain("content"),
    AttributeInfo::plain("contenteditable"),
    AttributeInfo::svg_camel("contentscripttype", "contentScriptType"),
    AttributeInfo::svg_camel("contentstyletype", "contentStyleType"),
    AttributeInfo::plain("contextmenu"),
    AttributeInfo::plain("coords"),
    AttributeInfo::plain("cursor"),
    AttributeInfo::plain("cx"),
    AttributeInfo::plain("cy"),
    AttributeInfo::plain("d"),
    AttributeInfo::plain("data"),
    AttributeInfo::plain("datafld"),
    AttributeInfo::plain("dataformatas").case_folded(),
    AttributeInfo::plain("datasrc"),
    AttributeInfo::plain("datetime"),
    AttributeInfo::plain("declare").boolean().case_folded(),
    AttributeInfo::plain("default").boolean().case_folded(),
    AttributeInfo::plain("defer").boolean().case_folded(),
    AttributeInfo::math_camel("definitionurl", "definitionURL"),
    AttributeInfo::plain("depth"),
    AttributeInfo::plain("descent"),
    AttributeInfo::svg_camel("diffuseconstant", "diffuseConstant"),
    AttributeInfo::plain("dir").case_folded(),
    AttributeInfo::plain("direction"),
    AttributeInfo::plain("disabled").boolean().case_folded(),
    AttributeInfo::plain("display"),
    AttributeInfo::plain("displaystyle"),
    AttributeInfo::plain("divisor"),
    AttributeInfo::plain("dominant-baseline"),
    AttributeInfo::plain("draggable"),
    AttributeInfo::plain("dur"),
    AttributeInfo::plain("dx"),
    AttributeInfo::plain("dy"),
    AttributeInfo::plain("edge"),
    AttributeInfo::svg_camel("edgemode", "edgeMode"),
    AttributeInfo::plain("elevation"),
    AttributeInfo::plain("enable-background"),
    AttributeInfo::plain("encoding"),
    AttributeInfo::plain("enctype").case_folded(),
    AttributeInfo::plain("end"),
    AttributeInfo::plain("equalcolumns"),
    AttributeInfo::plain("equalrows"),
    AttributeInfo::plain("exponent"),
    AttributeInfo::svg_camel("externalresourcesrequired", "externalResourcesRequired"),
    AttributeInfo::plain("face"),
    AttributeInfo::plain("fence"),
    AttributeInfo::plain("fill"),
    AttributeInfo::plain("fill-opacity"),
    AttributeInfo::plain("fill-rule"),
    AttributeInfo::plain("filter"),
    AttributeInfo::svg_camel("filterres", "filterRes"),
    AttributeInfo::svg_camel("filterunits", "filterUnits"),
    AttributeInfo::plain("flood-color"),
    AttributeInfo::plain("flood-opacity"),
    AttributeInfo::plain("font-family"),
    AttributeInfo::plain("font-size"),
    AttributeInfo::plain("font-size-adjust"),
    AttributeInfo::plain("font-stretch"),
    AttributeInfo::plain("font-style"),
    AttributeInfo::plain("font-variant"),
    AttributeInfo::plain("font-weight"),
    AttributeInfo::plain("fontfamily"),
    AttributeInfo::plain("fontsize"),
    AttributeInfo::plain("fontstyle"),
    AttributeInfo::plain("fontweight"),
    AttributeInfo::plain("for"),
    AttributeInfo::plain("form"),
    AttributeInfo::plain("format"),
    AttributeInfo::plain("frame").case_folded(),
    AttributeInfo::plain("frameborder"),
    AttributeInfo::plain("framespacing"),
    AttributeInfo::plain("from"),
    AttributeInfo::plain("fx"),
    AttributeInfo::plain("fy"),
    AttributeInfo::plain("g1"),
    AttributeInfo::plain("g2"),
    AttributeInfo::plain("glyph-name"),
    AttributeInfo::plain("glyph-orientation-horizontal"),
    AttributeInfo::plain("glyph-orientation-vertical"),
    AttributeInfo::svg_camel("glyphref", "glyphRef"),
    AttributeInfo::svg_camel("gradienttransform", "gradientTransform"),
    AttributeInfo::svg_camel("gradientunits", "gradientUnits"),
    AttributeInfo::plain("groupalign"),
    AttributeInfo::plain("hanging"),
    AttributeInfo::plain("headers"),
    AttributeInfo::plain("height"),
    AttributeInfo::plain("hidden"),
    AttributeInfo::plain("hidefocus"),
    AttributeInfo::plain("high"),
    AttributeInfo::plain("horiz-adv-x"),
    AttributeInfo::plain("horiz-origin-x"),
    AttributeInfo::plain("horiz-origin-y"),
    AttributeInfo::plain("href"),
    AttributeInfo::plain("hreflang"),
    AttributeInfo::plain("hspace"),
    AttributeInfo::plain("http-equiv"),
    AttributeInfo::plain("icon"),
    AttributeInfo::plain("id").id(),
    AttributeInfo::plain("ideographic"),
    AttributeInfo::plain("image-rendering"),
    AttributeInfo::plain("in"),
    AttributeInfo::plain("in2"),
    AttributeInfo::plain("index"),
    AttributeInfo::plain("inputmode"),
    AttributeInfo::plain("intercept"),
    AttributeInfo::plain("irrelevant"),
    AttributeInfo::plain("ismap").boolean().case_folded(),
    AttributeInfo::plain("k"),
    AttributeInfo::plain("k1"),
    AttributeInfo::plain("k2"),
    AttributeInfo::plain("k3"),
    AttributeInfo::plain("k4"),
    AttributeInfo::svg_camel("kernelmatrix", "kernelMatrix"),
    AttributeInfo::svg_camel("kernelunitlength", "kernelUnitLength"),
    AttributeInfo::plain("kerning"),
    AttributeInfo::svg_camel("keypoints", "keyPoints"),
    AttributeInfo::svg_camel("keysplines", "keySplines"),
    AttributeInfo::svg_camel("keytimes", "keyTimes"),
    AttributeInfo::plain("label"),
    AttributeInfo::plain("lang"),
    AttributeInfo::plain("language"),
    AttributeInfo::plain("largeop"),
    AttributeInfo::svg_camel("lengthadjust", "lengthAdjust"),
    AttributeInfo::plain("letter-spacing"),
    AttributeInfo::plain("lighting-color"),
    AttributeInfo::svg_camel("limitingconeangle", "limitingConeAngle"),
    AttributeInfo::plain("linebreak"),
    AttributeInfo::plain("linethickness"),
    AttributeInfo::plain("link"),
    AttributeInfo::plain("list"),
    AttributeInfo::plain("local"),
    AttributeInfo::plain("longdesc"),
    AttributeInfo::plain("low"),
    AttributeInfo::plain("lowsrc"),
    AttributeInfo::plain("lquote"),
    AttributeInfo::plain("lspace"),
    AttributeInfo::plain("macros"),
    AttributeInfo::plain("manifest"),
    AttributeInfo::plain("marginheight"),
    AttributeInfo::plain("marginwidth"),
    AttributeInfo::plain("marker-end"),
    AttributeInfo::plain("marker-mid"),
    AttributeInfo::plain("marker-start"),
    AttributeInfo::svg_camel("markerheight", "markerHeight"),
    AttributeInfo::svg_camel("markerunits", "markerUnits"),
    AttributeInfo::svg_camel("markerwidth", "markerWidth"),
    AttributeInfo::plain("mask"),
    AttributeInfo::svg_camel("maskcontentunits", "maskContentUnits"),
    AttributeInfo::svg_camel("maskunits", "maskUnits"),
    AttributeInfo::plain("mathbackground"),
    AttributeInfo::plain("mathcolor"),
    AttributeInfo::plain("mathematical"),
    AttributeInfo::plain("mathsize"),
    AttributeInfo::plain("mathvariant"),
    AttributeInfo::plain("max"),
    AttributeInfo::plain("maxlength"),
    AttributeInfo::plain("maxsize"),
    AttributeInfo::plain("media"),
    AttributeInfo::plain("mediummathspace"),
    AttributeInfo::plain("method").case_folded(),
    AttributeInfo::plain("min"),
    AttributeInfo::plain("minsize"),
    AttributeInfo::plain("mode"),
    AttributeInfo::plain("movablelimits"),
    AttributeInfo::plain("multiple").boolean().case_folded(),
    AttributeInfo::plain("name"),
    AttributeInfo::plain("nargs"),
    AttributeInfo::plain("nohref").boolean().case_folded(),
    AttributeInfo::plain("noresize").boolean().case_folded(),
    AttributeInfo::plain("noshade").boolean().case_folded(),
    AttributeInfo::plain("notation"),
    AttributeInfo::plain("nowrap").boolean().case_folded(),
    AttributeInfo::svg_camel("numoctaves", "numOctaves"),
    AttributeInfo::plain("object"),
    AttributeInfo::plain("occurrence"),
    AttributeInfo::plain("offset"),
    AttributeInfo::plain("onabort"),
    AttributeInfo::plain("onactivate"),
    AttributeInfo::plain("onafterprint"),
    AttributeInfo::plain("onafterupdate"),
    AttributeInfo::plain("onbefordeactivate"),
    AttributeInfo::plain("onbeforeactivate"),
    AttributeInfo::plain("onbeforecopy"),
    AttributeInfo::plain("onbeforecut"),
    AttributeInfo::plain("onbeforeeditfocus"),
    AttributeInfo::plain("onbeforepaste"),
    AttributeInfo::plain("onbeforeprint"),
    AttributeInfo::plain("onbeforeunload"),
    AttributeInfo::plain("onbeforeupdate"),
    AttributeInfo::plain("onbegin"),
    AttributeInfo::plain("onblur"),
    AttributeInfo::plain("onbounce"),
    AttributeInfo::plain("oncellchange"),
    AttributeInfo::plain("onchange"),
    AttributeInfo::plain("onclick"),
    AttributeInfo::plain("oncontextmenu"),
    AttributeInfo::plain("oncontrolselect"),
    AttributeInfo::plain("oncopy"),
    AttributeInfo::plain("oncut"),
    AttributeInfo::plain("ondataavailable"),
    AttributeInfo::plain("ondatasetchanged"),
    AttributeInfo::plain("ondatasetcomplete"),
    AttributeInfo::plain("ondblclick"),
    AttributeInfo::plain("ondeactivate"),
    AttributeInfo::plain("ondrag"),
    AttributeInfo::plain("ondragdrop"),
    AttributeInfo::plain("ondragend"),
    AttributeInfo::plain("ondragenter"),
    AttributeInfo::plain("ondragleave"),
    AttributeInfo::plain("ondragover"),
    AttributeInfo::plain("ondragstart"),
    AttributeInfo::plain("ondrop"),
    AttributeInfo::plain("onend"),
    AttributeInfo::plain("onerror"),
    AttributeInfo::plain("onerrorupdate"),
    AttributeInfo::plain("onfilterchange"),
    AttributeInfo::plain("onfinish"),
    AttributeInfo::plain("onfocus"),
    AttributeInfo::plain("onfocusin"),
    AttributeInfo::plain("onfocusout"),
    AttributeInfo::plain("onformchange"),
    AttributeInfo::plain("onforminput"),
    AttributeInfo::plain("onhelp"),
    AttributeInfo::plain("oninput"),
    AttributeInfo::plain("oninvalid"),
    AttributeInfo::plain("onkeydown"),
    AttributeInfo::plain("onkeypress"),
    AttributeInfo::plain("onkeyup"),
    AttributeInfo::plain("onload"),
    AttributeInfo::plain("onlosecapture"),
    AttributeInfo::plain("onmessage"),
    AttributeInfo::plain("onmousedown"),
    AttributeInfo::plain("onmouseenter"),
    AttributeInfo::plain("onmouseleave"),
    AttributeInfo::plain("onmousemove"),
    AttributeInfo::plain("onmouseout"),
    AttributeInfo::plain("onmouseover"),
    AttributeInfo::plain("onmouseup"),
    AttributeInfo::plain("onmousewheel"),
    AttributeInfo::plain("onmove"),
    AttributeInfo::plain("onmoveend"),
    AttributeInfo::plain("onmovestart"),
    AttributeInfo::plain("onpaste"),
    AttributeInfo::plain("onpropertychange"),
    AttributeInfo::plain("onreadystatechange"),
    AttributeInfo::plain("onrepeat"),
    AttributeInfo::plain("onreset"),
    AttributeInfo::plain("onresize"),
    AttributeInfo::plain("onrowenter"),
    AttributeInfo::plain("onrowexit"),
    AttributeInfo::plain("onrowsdelete"),
    AttributeInfo::plain("onrowsinserted"),
    AttributeInfo::plain("onscroll"),
    AttributeInfo::plain("onselect"),
    AttributeInfo::plain("onselectstart"),
    AttributeInfo::plain("onstart"),
    AttributeInfo::plain("onstop"),
    AttributeInfo::plain("onsubmit"),
    AttributeInfo::plain("onunload"),
    AttributeInfo::plain("onzoom"),
    AttributeInfo::plain("opacity"),
    AttributeInfo::plain("open"),
    AttributeInfo::plain("operator"),
    AttributeInfo::plain("optimum"),
    AttributeInfo::plain("order"),
    AttributeInfo::plain("orient"),
    AttributeInfo::plain("orientation"),
    AttributeInfo::plain("origin"),
    AttributeInfo::plain("other"),
    AttributeInfo::plain("overflow"),
    AttributeInfo::plain("overline-position"),
    AttributeInfo::plain("overline-thickness"),
    AttributeInfo::plain("panose-1"),
    AttributeInfo::plain("path"),
    AttributeInfo::svg_camel("pathlength", "pathLength"),
    AttributeInfo::plain("pattern"),
    AttributeInfo::svg_camel("patterncontentunits", "patternContentUnits"),
    AttributeInfo::svg_camel("patterntransform", "patternTransform"),
    AttributeInfo::svg_camel("patternunits", "patternUnits"),
    AttributeInfo::plain("ping"),
    AttributeInfo::plain("pointer-events"),
    AttributeInfo::plain("points"),
    AttributeInfo::svg_camel("pointsatx", "pointsAtX"),
    AttributeInfo::svg_camel("pointsaty", "pointsAtY"),
    AttributeInfo::svg_camel("pointsatz", "pointsAtZ"),
    AttributeInfo::plain("poster"),
    AttributeInfo::svg_camel("preservealpha", "preserveAlpha"),
    AttributeInfo::svg_camel("preserveaspectratio", "preserveAspectRatio"),
    AttributeInfo::svg_camel("primitiveunits", "primitiveUnits"),
    AttributeInfo::plain("profile"),
    AttributeInfo::plain("prompt"),
    AttributeInfo::plain("r"),
    AttributeInfo::plain("radiogroup"),
    AttributeInfo::plain("radius"),
    AttributeInfo::plain("readonly").boolean().case_folded(),
    AttributeInfo::svg_camel("refx", "refX"),
    AttributeInfo::svg_camel("refy", "refY"),
    AttributeInfo::plain("rel"),
    AttributeInfo::plain("rendering-intent"),
    AttributeInfo::plain("repeat"),
    AttributeInfo::plain("repeat-max"),
    AttributeInfo::plain("repeat-min"),
    AttributeInfo::plain("repeat-start"),
    AttributeInfo::plain("repeat-template"),
    AttributeInfo::svg_camel("repeatcount", "repeatCount"),
    AttributeInfo::svg_camel("repeatdur", "repeatDur"),
    AttributeInfo::plain("replace").case_folded(),
    AttributeInfo::plain("required").boolean().case_folded(),
    AttributeInfo::svg_camel("requiredextensions", "requiredExtensions"),
    AttributeInfo::svg_camel("requiredfeatures", "requiredFeatures"),
    AttributeInfo::plain("restart"),
    AttributeInfo::plain("result"),
    AttributeInfo::plain("rev"),
    AttributeInfo::plain("role"),
    AttributeInfo::plain("rotate"),
    AttributeInfo::plain("rowalign"),
    AttributeInfo::plain("rowlines"),
    AttributeInfo::plain("rows"),
    AttributeInfo::plain("rowspacing"),
    AttributeInfo::plain("rowspan"),
    AttributeInfo::plain("rquote"),
    AttributeInfo::plain("rspace"),
    AttributeInfo::plain("rt"),
    AttributeInfo::plain("rules").case_folded(),
    AttributeInfo::plain("rx"),
    AttributeInfo::plain("ry"),
    AttributeInfo::plain("sandbox"),
    AttributeInfo::plain("scale"),
    AttributeInfo::plain("scheme"),
    AttributeInfo::plain("scope").case_folded(),
    AttributeInfo::plain("scoped"),
    AttributeInfo::plain("scriptlevel"),
    AttributeInfo::plain("scriptminsize"),
    AttributeInfo::plain("scriptsizemultiplier"),
    AttributeInfo::plain("scrolldelay"),
    AttributeInfo::plain("scrolling").case_folded(),
    AttributeInfo::plain("seamless"),
    AttributeInfo::plain("seed"),
    AttributeInfo::plain("selected").boolean().case_folded(),
    AttributeInfo::plain("selection"),
    AttributeInfo::plain("separator"),
    AttributeInfo::plain("separators"),
    AttributeInfo::plain("shape").case_folded(),
    AttributeInfo::plain("shape-rendering"),
    AttributeInfo::plain("size"),
    AttributeInfo::plain("slope"),
    AttributeInfo::plain("spacing"),
    AttributeInfo::plain("span"),
    AttributeInfo::plain("specification"),
    AttributeInfo::svg_camel("specularconstant", "specularConstant"),
    AttributeInfo::svg_camel("specularexponent", "specularExponent"),
    AttributeInfo::plain("speed"),
    AttributeInfo::svg_camel("spreadmethod", "spreadMethod"),
    AttributeInfo::plain("src"),
    AttributeInfo::plain("standby"),
    AttributeInfo::plain("start"),
    AttributeInfo::svg_camel("startoffset", "startOffset"),
    AttributeInfo::svg_camel("stddeviation", "stdDeviation"),
    AttributeInfo::plain("stemh"),
    AttributeInfo::plain("stemv"),
    AttributeInfo::plain("step").case_folded(),
    AttributeInfo::svg_camel("stitchtiles", "stitchTiles"),
    AttributeInfo::plain("stop-color"),
    AttributeInfo::plain("stop-opacity"),
    AttributeInfo::plain("stretchy"),
    AttributeInfo::plain("strikethrough-position"),
    AttributeInfo::plain("strikethrough-thickness"),
    AttributeInfo::plain("string"),
    AttributeInfo::plain("stroke"),
    AttributeInfo::plain("stroke-dasharray"),
    AttributeInfo::plain("stroke-dashoffset"),
    AttributeInfo::plain("stroke-linecap"),
    AttributeInfo::plain("stroke-linejoin"),
    AttributeInfo::plain("stroke-miterlimit"),
    AttributeInfo::plain("stroke-opacity"),
    AttributeInfo::plain("stroke-width"),
    AttributeInfo::plain("style"),
    AttributeInfo::plain("subscriptshift"),
    AttributeInfo::plain("summary"),
    AttributeInfo::plain("superscriptshift"),
    AttributeInfo::svg_camel("surfacescale", "surfaceScale"),
    AttributeInfo::plain("symmetric"),
    AttributeInfo::svg_camel("systemlanguage", "systemLanguage"),
    AttributeInfo::plain("tabindex"),
    AttributeInfo::svg_camel("tablevalues", "tableValues"),
    AttributeInfo::plain("target"),
    AttributeInfo::svg_camel("targetx", "targetX"),
    AttributeInfo::svg_camel("targety", "targetY"),
    AttributeInfo::plain("template"),
    AttributeInfo::plain("text"),
    AttributeInfo::plain("text-anchor"),
    AttributeInfo::plain("text-decoration"),
    AttributeInfo::plain("text-rendering"),
    AttributeInfo::svg_camel("textlength", "textLength"),
    AttributeInfo::plain("thickmathspace"),
    AttributeInfo::plain("thinmathspace"),
    AttributeInfo::plain("title"),
    AttributeInfo::plain("to"),
    AttributeInfo::plain("transform"),
    AttributeInfo::plain("type").case_folded(),
    AttributeInfo::plain("u1"),
    AttributeInfo::plain("u2"),
    AttributeInfo::plain("underline-position"),
    AttributeInfo::plain("underline-thickness"),
    AttributeInfo::plain("unicode"),
    AttributeInfo::plain("unicode-bidi"),
    AttributeInfo::plain("unicode-range"),
    AttributeInfo::plain("units-per-em"),
    AttributeInfo::plain("unselectable"),
    AttributeInfo::plain("usemap"),
    AttributeInfo::plain("v-alphabetic"),
    AttributeInfo::plain("v-hanging"),
    AttributeInfo::plain("v-ideographic"),
    AttributeInfo::plain("v-mathematical"),
    AttributeInfo::plain("valign").case_folded(),
    AttributeInfo::plain("value"),
    AttributeInfo::plain("value:"),
    AttributeInfo::plain("values"),
    AttributeInfo::plain("valuetype").case_folded(),
    AttributeInfo::plain("version"),
    AttributeInfo::plain("vert-adv-y"),
    AttributeInfo::plain("vert-origin-x"),
    AttributeInfo::plain("vert-origin-y"),
    AttributeInfo::plain("verythickmathspace"),
    AttributeInfo::plain("verythinmathspace"),
    AttributeInfo::plain("veryverythickmathspace"),
    AttributeInfo::plain("veryverythinmathspace"),
    AttributeInfo::svg_camel("viewbox", "viewBox"),
    AttributeInfo::svg_camel("viewtarget", "viewTarget"),
    AttributeInfo::plain("visibility"),
    AttributeInfo::plain("vlink"),
    AttributeInfo::plain("vspace"),
    AttributeInfo::plain("when"),
    AttributeInfo::plain("width"),
    AttributeInfo::plain("widths"),
    AttributeInfo::plain("word-spacing"),
    AttributeInfo::plain("wrap"),
    AttributeInfo::plain("writing-mode"),
    AttributeInfo::plain("x"),
    AttributeInfo::plain("x-height"),
    AttributeInfo::plain("x1"),
    AttributeInfo::plain("x2"),
    AttributeInfo::svg_camel("xchannelselector", "xChannelSelector"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:actuate", "actuate"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:arcrole", "arcrole"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:href", "href"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:role", "role"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:show", "show"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:title", "title"),
    AttributeInfo::colonified(AttributeNamespace::XLink, "xlink:type", "type"),
    AttributeInfo::colonified(AttributeNamespace::Xml, "xml:base", "base"),
    AttributeInfo::colonified(AttributeNamespace::Xml, "xml:lang", "lang").mapped_to_lang(),
    AttributeInfo::colonified(AttributeNamespace::Xml, "xml:space", "space"),
    AttributeInfo::xmlns("xmlns", "xmlns"),
    AttributeInfo::xmlns("xmlns:xlink", "xlink"),
    AttributeInfo::plain("xref"),
    AttributeInfo::plain("y"),
    AttributeInfo::plain("y1"),
    AttributeInfo::plain("y2"),
    AttributeInfo::svg_camel("ychannelselector", "yChannelSelector"),
    AttributeInfo::plain("z"),
    AttributeInfo::svg_camel("zoomandpan", "zoomAndPan"),
];

/// `abbr`
pub const ABBR: AttributeName = AttributeName::builtin(0, "abbr");
/// `accent`
pub const ACCENT: AttributeName = AttributeName::builtin(1, "accent");
/// `accent-height`
pub const ACCENT_HEIGHT: AttributeName = AttributeName::builtin(2, "accent-height");
/// `accentunder`
pub const ACCENTUNDER: AttributeName = AttributeName::builtin(3, "accentunder");
/// `accept`
pub const ACCEPT: AttributeName = AttributeName::builtin(4, "accept");
/// `accept-charset`
pub const ACCEPT_CHARSET: AttributeName = AttributeName::builtin(5, "accept-charset");
/// `accesskey`
pub const ACCESSKEY: AttributeName = AttributeName::builtin(6, "accesskey");
/// `accumulate`
pub const ACCUMULATE: AttributeName = AttributeName::builtin(7, "accumulate");
/// `action`
pub const ACTION: AttributeName = AttributeName::builtin(8, "action");
/// `actiontype`
pub const ACTIONTYPE: AttributeName = AttributeName::builtin(9, "actiontype");
/// `active`
pub const ACTIVE: AttributeName = AttributeName::builtin(10, "active");
/// `additive`
pub const ADDITIVE: AttributeName = AttributeName::builtin(11, "additive");
/// `align`
pub const ALIGN: AttributeName = AttributeName::builtin(12, "align");
/// `alignment-baseline`
pub const ALIGNMENT_BASELINE: AttributeName = AttributeName::builtin(13, "alignment-baseline");
/// `alignmentscope`
pub const ALIGNMENTSCOPE: AttributeName = AttributeName::builtin(14, "alignmentscope");
/// `alink`
pub const ALINK: AttributeName = AttributeName::builtin(15, "alink");
/// `alphabetic`
pub const ALPHABETIC: AttributeName = AttributeName::builtin(16, "alphabetic");
/// `alt`
pub const ALT: AttributeName = AttributeName::builtin(17, "alt");
/// `altimg`
pub const ALTIMG: AttributeName = AttributeName::builtin(18, "altimg");
/// `alttext`
pub const ALTTEXT: AttributeName = AttributeName::builtin(19, "alttext");
/// `amplitude`
pub const AMPLITUDE: AttributeName = AttributeName::builtin(20, "amplitude");
/// `arabic-form`
pub const ARABIC_FORM: AttributeName = AttributeName::builtin(21, "arabic-form");
/// `archive`
pub const ARCHIVE: AttributeName = AttributeName::builtin(22, "archive");
/// `aria-activedescendant`
pub const ARIA_ACTIVEDESCENDANT: AttributeName = AttributeName::builtin(23, "aria-activedescendant");
/// `aria-atomic`
pub const ARIA_ATOMIC: AttributeName = AttributeName::builtin(24, "aria-atomic");
/// `aria-autocomplete`
pub const ARIA_AUTOCOMPLETE: AttributeName = AttributeName::builtin(25, "aria-autocomplete");
/// `aria-channel`
pub const ARIA_CHANNEL: AttributeName = AttributeName::builtin(26, "aria-channel");
/// `aria-controls`
pub const ARIA_CONTROLS: AttributeName = AttributeName::builtin(27, "aria-controls");
/// `aria-datatype`
pub const ARIA_DATATYPE: AttributeName = AttributeName::builtin(28, "aria-datatype");
/// `aria-describedby`
pub const ARIA_DESCRIBEDBY: AttributeName = AttributeName::builtin(29, "aria-describedby");
/// `aria-dropeffect`
pub const ARIA_DROPEFFECT: AttributeName = AttributeName::builtin(30, "aria-dropeffect");
/// `aria-flowto`
pub const ARIA_FLOWTO: AttributeName = AttributeName::builtin(31, "aria-flowto");
/// `aria-haspopup`
pub const ARIA_HASPOPUP: AttributeName = AttributeName::builtin(32, "aria-haspopup");
/// `aria-labelledby`
pub const ARIA_LABELLEDBY: AttributeName = AttributeName::builtin(33, "aria-labelledby");
/// `aria-level`
pub const ARIA_LEVEL: AttributeName = AttributeName::builtin(34, "aria-level");
/// `aria-live`
pub const ARIA_LIVE: AttributeName = AttributeName::builtin(35, "aria-live");
/// `aria-multiline`
pub const ARIA_MULTILINE: AttributeName = AttributeName::builtin(36, "aria-multiline");
/// `aria-multiselectable`
pub const ARIA_MULTISELECTABLE: AttributeName = AttributeName::builtin(37, "aria-multiselectable");
/// `aria-owns`
pub const ARIA_OWNS: AttributeName = AttributeName::builtin(38, "aria-owns");
/// `aria-posinset`
pub const ARIA_POSINSET: AttributeName = AttributeName::builtin(39, "aria-posinset");
/// `aria-readonly`
pub const ARIA_READONLY: AttributeName = AttributeName::builtin(40, "aria-readonly");
/// `aria-relevant`
pub const ARIA_RELEVANT: AttributeName = AttributeName::builtin(41, "aria-relevant");
/// `aria-required`
pub const ARIA_REQUIRED: AttributeName = AttributeName::builtin(42, "aria-required");
/// `aria-secret`
pub const ARIA_SECRET: AttributeName = AttributeName::builtin(43, "aria-secret");
/// `aria-setsize`
pub const ARIA_SETSIZE: AttributeName = AttributeName::builtin(44, "aria-setsize");
/// `aria-sort`
pub const ARIA_SORT: AttributeName = AttributeName::builtin(45, "aria-sort");
/// `aria-templateid`
pub const ARIA_TEMPLATEID: AttributeName = AttributeName::builtin(46, "aria-templateid");
/// `aria-valuemax`
pub const ARIA_VALUEMAX: AttributeName = AttributeName::builtin(47, "aria-valuemax");
/// `aria-valuemin`
pub const ARIA_VALUEMIN: AttributeName = AttributeName::builtin(48, "aria-valuemin");
/// `aria-valuenow`
pub const ARIA_VALUENOW: AttributeName = AttributeName::builtin(49, "aria-valuenow");
/// `ascent`
pub const ASCENT: AttributeName = AttributeName::builtin(50, "ascent");
/// `async`
pub const ASYNC: AttributeName = AttributeName::builtin(51, "async");
/// `attributename`
pub const ATTRIBUTENAME: AttributeName = AttributeName::builtin(52, "attributename");
/// `attributetype`
pub const ATTRIBUTETYPE: AttributeName = AttributeName::builtin(53, "attributetype");
/// `autocomplete`
pub const AUTOCOMPLETE: AttributeName = AttributeName::builtin(54, "autocomplete");
/// `autofocus`
pub const AUTOFOCUS: AttributeName = AttributeName::builtin(55, "autofocus");
/// `autosubmit`
pub const AUTOSUBMIT: AttributeName = AttributeName::builtin(56, "autosubmit");
/// `axis`
pub const AXIS: AttributeName = AttributeName::builtin(57, "axis");
/// `azimuth`
pub const AZIMUTH: AttributeName = AttributeName::builtin(58, "azimuth");
/// `background`
pub const BACKGROUND: AttributeName = AttributeName::builtin(59, "background");
/// `base`
pub const BASE: AttributeName = AttributeName::builtin(60, "base");
/// `basefrequency`
pub const BASEFREQUENCY: AttributeName = AttributeName::builtin(61, "basefrequency");
/// `baseline`
pub const BASELINE: AttributeName = AttributeName::builtin(62, "baseline");
/// `baseline-shift`
pub const BASELINE_SHIFT: AttributeName = AttributeName::builtin(63, "baseline-shift");
/// `baseprofile`
pub const BASEPROFILE: AttributeName = AttributeName::builtin(64, "baseprofile");
/// `bbox`
pub const BBOX: AttributeName = AttributeName::builtin(65, "bbox");
/// `begin`
pub const BEGIN: AttributeName = AttributeName::builtin(66, "begin");
/// `bevelled`
pub const BEVELLED: AttributeName = AttributeName::builtin(67, "bevelled");
/// `bgcolor`
pub const BGCOLOR: AttributeName = AttributeName::builtin(68, "bgcolor");
/// `bias`
pub const BIAS: AttributeName = AttributeName::builtin(69, "bias");
/// `border`
pub const BORDER: AttributeName = AttributeName::builtin(70, "border");
/// `by`
pub const BY: AttributeName = AttributeName::builtin(71, "by");
/// `calcmode`
pub const CALCMODE: AttributeName = AttributeName::builtin(72, "calcmode");
/// `cap-height`
pub const CAP_HEIGHT: AttributeName = AttributeName::builtin(73, "cap-height");
/// `cellpadding`
pub const CELLPADDING: AttributeName = AttributeName::builtin(74, "cellpadding");
/// `cellspacing`
pub const CELLSPACING: AttributeName = AttributeName::builtin(75, "cellspacing");
/// `char`
pub const CHAR: AttributeName = AttributeName::builtin(76, "char");
/// `charoff`
pub const CHAROFF: AttributeName = AttributeName::builtin(77, "charoff");
/// `charset`
pub const CHARSET: AttributeName = AttributeName::builtin(78, "charset");
/// `checked`
pub const CHECKED: AttributeName = AttributeName::builtin(79, "checked");
/// `cite`
pub const CITE: AttributeName = AttributeName::builtin(80, "cite");
/// `class`
pub const CLASS: AttributeName = AttributeName::builtin(81, "class");
/// `classid`
pub const CLASSID: AttributeName = AttributeName::builtin(82, "classid");
/// `clear`
pub const CLEAR: AttributeName = AttributeName::builtin(83, "clear");
/// `clip`
pub const CLIP: AttributeName = AttributeName::builtin(84, "clip");
/// `clip-path`
pub const CLIP_PATH: AttributeName = AttributeName::builtin(85, "clip-path");
/// `clip-rule`
pub const CLIP_RULE: AttributeName = AttributeName::builtin(86, "clip-rule");
/// `clippathunits`
pub const CLIPPATHUNITS: AttributeName = AttributeName::builtin(87, "clippathunits");
/// `close`
pub const CLOSE: AttributeName = AttributeName::builtin(88, "close");
/// `closure`
pub const CLOSURE: AttributeName = AttributeName::builtin(89, "closure");
/// `code`
pub const CODE: AttributeName = AttributeName::builtin(90, "code");
/// `codebase`
pub const CODEBASE: AttributeName = AttributeName::builtin(91, "codebase");
/// `codetype`
pub const CODETYPE: AttributeName = AttributeName::builtin(92, "codetype");
/// `color`
pub const COLOR: AttributeName = AttributeName::builtin(93, "color");
/// `color-interpolation`
pub const COLOR_INTERPOLATION: AttributeName = AttributeName::builtin(94, "color-interpolation");
/// `color-interpolation-filters`
pub const COLOR_INTERPOLATION_FILTERS: AttributeName = AttributeName::builtin(95, "color-interpolation-filters");
/// `color-profile`
pub const COLOR_PROFILE: AttributeName = AttributeName::builtin(96, "color-profile");
/// `color-rendering`
pub const COLOR_RENDERING: AttributeName = AttributeName::builtin(97, "color-rendering");
/// `cols`
pub const COLS: AttributeName = AttributeName::builtin(98, "cols");
/// `colspan`
pub const COLSPAN: AttributeName = AttributeName::builtin(99, "colspan");
/// `columnalign`
pub const COLUMNALIGN: AttributeName = AttributeName::builtin(100, "columnalign");
/// `columnlines`
pub const COLUMNLINES: AttributeName = AttributeName::builtin(101, "columnlines");
/// `columnspacing`
pub const COLUMNSPACING: AttributeName = AttributeName::builtin(102, "columnspacing");
/// `columnspan`
pub const COLUMNSPAN: AttributeName = AttributeName::builtin(103, "columnspan");
/// `columnwidth`
pub const COLUMNWIDTH: AttributeName = AttributeName::builtin(104, "columnwidth");
/// `compact`
pub const COMPACT: AttributeName = AttributeName::builtin(105, "compact");
/// `content`
pub const CONTENT: AttributeName = AttributeName::builtin(106, "content");
/// `contenteditable`
pub const CONTENTEDITABLE: AttributeName = AttributeName::builtin(107, "contenteditable");
/// `contentscripttype`
pub const CONTENTSCRIPTTYPE: AttributeName = AttributeName::builtin(108, "contentscripttype");
/// `contentstyletype`
pub const CONTENTSTYLETYPE: AttributeName = AttributeName::builtin(109, "contentstyletype");
/// `contextmenu`
pub const CONTEXTMENU: AttributeName = AttributeName::builtin(110, "contextmenu");
/// `coords`
pub const COORDS: AttributeName = AttributeName::builtin(111, "coords");
/// `cursor`
pub const CURSOR: AttributeName = AttributeName::builtin(112, "cursor");
/// `cx`
pub const CX: AttributeName = AttributeName::builtin(113, "cx");
/// `cy`
pub const CY: AttributeName = AttributeName::builtin(114, "cy");
/// `d`
pub const D: AttributeName = AttributeName::builtin(115, "d");
/// `data`
pub const DATA: AttributeName = AttributeName::builtin(116, "data");
/// `datafld`
pub const DATAFLD: AttributeName = AttributeName::builtin(117, "datafld");
/// `dataformatas`
pub const DATAFORMATAS: AttributeName = AttributeName::builtin(118, "dataformatas");
/// `datasrc`
pub const DATASRC: AttributeName = AttributeName::builtin(119, "datasrc");
/// `datetime`
pub const DATETIME: AttributeName = AttributeName::builtin(120, "datetime");
/// `declare`
pub const DECLARE: AttributeName = AttributeName::builtin(121, "declare");
/// `default`
pub const DEFAULT: AttributeName = AttributeName::builtin(122, "default");
/// `defer`
pub const DEFER: AttributeName = AttributeName::builtin(123, "defer");
/// `definitionurl`
pub const DEFINITIONURL: AttributeName = AttributeName::builtin(124, "definitionurl");
/// `depth`
pub const DEPTH: AttributeName = AttributeName::builtin(125, "depth");
/// `descent`
pub const DESCENT: AttributeName = AttributeName::builtin(126, "descent");
/// `diffuseconstant`
pub const DIFFUSECONSTANT: AttributeName = AttributeName::builtin(127, "diffuseconstant");
/// `dir`
pub const DIR: AttributeName = AttributeName::builtin(128, "dir");
/// `direction`
pub const DIRECTION: AttributeName = AttributeName::builtin(129, "direction");
/// `disabled`
pub const DISABLED: AttributeName = AttributeName::builtin(130, "disabled");
/// `display`
pub const DISPLAY: AttributeName = AttributeName::builtin(131, "display");
/// `displaystyle`
pub const DISPLAYSTYLE: AttributeName = AttributeName::builtin(132, "displaystyle");
/// `divisor`
pub const DIVISOR: AttributeName = AttributeName::builtin(133, "divisor");
/// `dominant-baseline`
pub const DOMINANT_BASELINE: AttributeName = AttributeName::builtin(134, "dominant-baseline");
/// `draggable`
pub const DRAGGABLE: AttributeName = AttributeName::builtin(135, "draggable");
/// `dur`
pub const DUR: AttributeName = AttributeName::builtin(136, "dur");
/// `dx`
pub const DX: AttributeName = AttributeName::builtin(137, "dx");
/// `dy`
pub const DY: AttributeName = AttributeName::builtin(138, "dy");
/// `edge`
pub const EDGE: AttributeName = AttributeName::builtin(139, "edge");
/// `edgemode`
pub const EDGEMODE: AttributeName = AttributeName::builtin(140, "edgemode");
/// `elevation`
pub const ELEVATION: AttributeName = AttributeName::builtin(141, "elevation");
/// `enable-background`
pub const ENABLE_BACKGROUND: AttributeName = AttributeName::builtin(142, "enable-background");
/// `encoding`
pub const ENCODING: AttributeName = AttributeName::builtin(143, "encoding");
/// `enctype`
pub const ENCTYPE: AttributeName = AttributeName::builtin(144, "enctype");
/// `end`
pub const END: AttributeName = AttributeName::builtin(145, "end");
/// `equalcolumns`
pub const EQUALCOLUMNS: AttributeName = AttributeName::builtin(146, "equalcolumns");
/// `equalrows`
pub const EQUALROWS: AttributeName = AttributeName::builtin(147, "equalrows");
/// `exponent`
pub const EXPONENT: AttributeName = AttributeName::builtin(148, "exponent");
/// `externalresourcesrequired`
pub const EXTERNALRESOURCESREQUIRED: AttributeName = AttributeName::builtin(149, "externalresourcesrequired");
/// `face`
pub const FACE: AttributeName = AttributeName::builtin(150, "face");
/// `fence`
pub const FENCE: AttributeName = AttributeName::builtin(151, "fence");
/// `fill`
pub const FILL: AttributeName = AttributeName::builtin(152, "fill");
/// `fill-opacity`
pub const FILL_OPACITY: AttributeName = AttributeName::builtin(153, "fill-opacity");
/// `fill-rule`
pub const FILL_RULE: AttributeName = AttributeName::builtin(154, "fill-rule");
/// `filter`
pub const FILTER: AttributeName = AttributeName::builtin(155, "filter");
/// `filterres`
pub const FILTERRES: AttributeName = AttributeName::builtin(156, "filterres");
/// `filterunits`
pub const FILTERUNITS: AttributeName = AttributeName::builtin(157, "filterunits");
/// `flood-color`
pub const FLOOD_COLOR: AttributeName = AttributeName::builtin(158, "flood-color");
/// `flood-opacity`
pub const FLOOD_OPACITY: AttributeName = AttributeName::builtin(159, "flood-opacity");
/// `font-family`
pub const FONT_FAMILY: AttributeName = AttributeName::builtin(160, "font-family");
/// `font-size`
pub const FONT_SIZE: AttributeName = AttributeName::builtin(161, "font-size");
/// `font-size-adjust`
pub const FONT_SIZE_ADJUST: AttributeName = AttributeName::builtin(162, "font-size-adjust");
/// `font-stretch`
pub const FONT_STRETCH: AttributeName = AttributeName::builtin(163, "font-stretch");
/// `font-style`
pub const FONT_STYLE: AttributeName = AttributeName::builtin(164, "font-style");
/// `font-variant`
pub const FONT_VARIANT: AttributeName = AttributeName::builtin(165, "font-variant");
/// `font-weight`
pub const FONT_WEIGHT: AttributeName = AttributeName::builtin(166, "font-weight");
/// `fontfamily`
pub const FONTFAMILY: AttributeName = AttributeName::builtin(167, "fontfamily");
/// `fontsize`
pub const FONTSIZE: AttributeName = AttributeName::builtin(168, "fontsize");
/// `fontstyle`
pub const FONTSTYLE: AttributeName = AttributeName::builtin(169, "fontstyle");
/// `fontweight`
pub const FONTWEIGHT: AttributeName = AttributeName::builtin(170, "fontweight");
/// `for`
pub const FOR: AttributeName = AttributeName::builtin(171, "for");
/// `form`
pub const FORM: AttributeName = AttributeName::builtin(172, "form");
/// `format`
pub const FORMAT: AttributeName = AttributeName::builtin(173, "format");
/// `frame`
pub const FRAME: AttributeName = AttributeName::builtin(174, "frame");
/// `frameborder`
pub const FRAMEBORDER: AttributeName = AttributeName::builtin(175, "frameborder");
/// `framespacing`
pub const FRAMESPACING: AttributeName = AttributeName::builtin(176, "framespacing");
/// `from`
pub const FROM: AttributeName = AttributeName::builtin(177, "from");
/// `fx`
pub const FX: AttributeName = AttributeName::builtin(178, "fx");
/// `fy`
pub const FY: AttributeName = AttributeName::builtin(179, "fy");
/// `g1`
pub const G1: AttributeName = AttributeName::builtin(180, "g1");
/// `g2`
pub const G2: AttributeName = AttributeName::builtin(181, "g2");
/// `glyph-name`
pub const GLYPH_NAME: AttributeName = AttributeName::builtin(182, "glyph-name");
/// `glyph-orientation-horizontal`
pub const GLYPH_ORIENTATION_HORIZONTAL: AttributeName = AttributeName::builtin(183, "glyph-orientation-horizontal");
/// `glyph-orientation-vertical`
pub const GLYPH_ORIENTATION_VERTICAL: AttributeName = AttributeName::builtin(184, "glyph-orientation-vertical");
/// `glyphref`
pub const GLYPHREF: AttributeName = AttributeName::builtin(185, "glyphref");
/// `gradienttransform`
pub const GRADIENTTRANSFORM: AttributeName = AttributeName::builtin(186, "gradienttransform");
/// `gradientunits`
pub const GRADIENTUNITS: AttributeName = AttributeName::builtin(187, "gradientunits");
/// `groupalign`
pub const GROUPALIGN: AttributeName = AttributeName::builtin(188, "groupalign");
/// `hanging`
pub const HANGING: AttributeName = AttributeName::builtin(189, "hanging");
/// `headers`
pub const HEADERS: AttributeName = AttributeName::builtin(190, "headers");
/// `height`
pub const HEIGHT: AttributeName = AttributeName::builtin(191, "height");
/// `hidden`
pub const HIDDEN: AttributeName = AttributeName::builtin(192, "hidden");
/// `hidefocus`
pub const HIDEFOCUS: AttributeName = AttributeName::builtin(193, "hidefocus");
/// `high`
pub const HIGH: AttributeName = AttributeName::builtin(194, "high");
/// `horiz-adv-x`
pub const HORIZ_ADV_X: AttributeName = AttributeName::builtin(195, "horiz-adv-x");
/// `horiz-origin-x`
pub const HORIZ_ORIGIN_X: AttributeName = AttributeName::builtin(196, "horiz-origin-x");
/// `horiz-origin-y`
pub const HORIZ_ORIGIN_Y: AttributeName = AttributeName::builtin(197, "horiz-origin-y");
/// `href`
pub const HREF: AttributeName = AttributeName::builtin(198, "href");
/// `hreflang`
pub const HREFLANG: AttributeName = AttributeName::builtin(199, "hreflang");
/// `hspace`
pub const HSPACE: AttributeName = AttributeName::builtin(200, "hspace");
/// `http-equiv`
pub const HTTP_EQUIV: AttributeName = AttributeName::builtin(201, "http-equiv");
/// `icon`
pub const ICON: AttributeName = AttributeName::builtin(202, "icon");
/// `id`
pub const ID: AttributeName = AttributeName::builtin(203, "id");
/// `ideographic`
pub const IDEOGRAPHIC: AttributeName = AttributeName::builtin(204, "ideographic");
/// `image-rendering`
pub const IMAGE_RENDERING: AttributeName = AttributeName::builtin(205, "image-rendering");
/// `in`
pub const IN: AttributeName = AttributeName::builtin(206, "in");
/// `in2`
pub const IN2: AttributeName = AttributeName::builtin(207, "in2");
/// `index`
pub const INDEX: AttributeName = AttributeName::builtin(208, "index");
/// `inputmode`
pub const INPUTMODE: AttributeName = AttributeName::builtin(209, "inputmode");
/// `intercept`
pub const INTERCEPT: AttributeName = AttributeName::builtin(210, "intercept");
/// `irrelevant`
pub const IRRELEVANT: AttributeName = AttributeName::builtin(211, "irrelevant");
/// `ismap`
pub const ISMAP: AttributeName = AttributeName::builtin(212, "ismap");
/// `k`
pub const K: AttributeName = AttributeName::builtin(213, "k");
/// `k1`
pub const K1: AttributeName = AttributeName::builtin(214, "k1");
/// `k2`
pub const K2: AttributeName = AttributeName::builtin(215, "k2");
/// `k3`
pub const K3: AttributeName = AttributeName::builtin(216, "k3");
/// `k4`
pub const K4: AttributeName = AttributeName::builtin(217, "k4");
/// `kernelmatrix`
pub const KERNELMATRIX: AttributeName = AttributeName::builtin(218, "kernelmatrix");
/// `kernelunitlength`
pub const KERNELUNITLENGTH: AttributeName = AttributeName::builtin(219, "kernelunitlength");
/// `kerning`
pub const KERNING: AttributeName = AttributeName::builtin(220, "kerning");
/// `keypoints`
pub const KEYPOINTS: AttributeName = AttributeName::builtin(221, "keypoints");
/// `keysplines`
pub const KEYSPLINES: AttributeName = AttributeName::builtin(222, "keysplines");
/// `keytimes`
pub const KEYTIMES: AttributeName = AttributeName::builtin(223, "keytimes");
/// `label`
pub const LABEL: AttributeName = AttributeName::builtin(224, "label");
/// `lang`
pub const LANG: AttributeName = AttributeName::builtin(225, "lang");
/// `language`
pub const LANGUAGE: AttributeName = AttributeName::builtin(226, "language");
/// `largeop`
pub const LARGEOP: AttributeName = AttributeName::builtin(227, "largeop");
/// `lengthadjust`
pub const LENGTHADJUST: AttributeName = AttributeName::builtin(228, "lengthadjust");
/// `letter-spacing`
pub const LETTER_SPACING: AttributeName = AttributeName::builtin(229, "letter-spacing");
/// `lighting-color`
pub const LIGHTING_COLOR: AttributeName = AttributeName::builtin(230, "lighting-color");
/// `limitingconeangle`
pub const LIMITINGCONEANGLE: AttributeName = AttributeName::builtin(231, "limitingconeangle");
/// `linebreak`
pub const LINEBREAK: AttributeName = AttributeName::builtin(232, "linebreak");
/// `linethickness`
pub const LINETHICKNESS: AttributeName = AttributeName::builtin(233, "linethickness");
/// `link`
pub const LINK: AttributeName = AttributeName::builtin(234, "link");
/// `list`
pub const LIST: AttributeName = AttributeName::builtin(235, "list");
/// `local`
pub const LOCAL: AttributeName = AttributeName::builtin(236, "local");
/// `longdesc`
pub const LONGDESC: AttributeName = AttributeName::builtin(237, "longdesc");
/// `low`
pub const LOW: AttributeName = AttributeName::builtin(238, "low");
/// `lowsrc`
pub const LOWSRC: AttributeName = AttributeName::builtin(239, "lowsrc");
/// `lquote`
pub const LQUOTE: AttributeName = AttributeName::builtin(240, "lquote");
/// `lspace`
pub const LSPACE: AttributeName = AttributeName::builtin(241, "lspace");
/// `macros`
pub const MACROS: AttributeName = AttributeName::builtin(242, "macros");
/// `manifest`
pub const MANIFEST: AttributeName = AttributeName::builtin(243, "manifest");
/// `marginheight`
pub const MARGINHEIGHT: AttributeName = AttributeName::builtin(244, "marginheight");
/// `marginwidth`
pub const MARGINWIDTH: AttributeName = AttributeName::builtin(245, "marginwidth");
/// `marker-end`
pub const MARKER_END: AttributeName = AttributeName::builtin(246, "marker-end");
/// `marker-mid`
pub const MARKER_MID: AttributeName = AttributeName::builtin(247, "marker-mid");
/// `marker-start`
pub const MARKER_START: AttributeName = AttributeName::builtin(248, "marker-start");
/// `markerheight`
pub const MARKERHEIGHT: AttributeName = AttributeName::builtin(249, "markerheight");
/// `markerunits`
pub const MARKERUNITS: AttributeName = AttributeName::builtin(250, "markerunits");
/// `markerwidth`
pub const MARKERWIDTH: AttributeName = AttributeName::builtin(251, "markerwidth");
/// `mask`
pub const MASK: AttributeName = AttributeName::builtin(252, "mask");
/// `maskcontentunits`
pub const MASKCONTENTUNITS: AttributeName = AttributeName::builtin(253, "maskcontentunits");
/// `maskunits`
pub const MASKUNITS: AttributeName = AttributeName::builtin(254, "maskunits");
/// `mathbackground`
pub const MATHBACKGROUND: AttributeName = AttributeName::builtin(255, "mathbackground");
/// `mathcolor`
pub const MATHCOLOR: AttributeName = AttributeName::builtin(256, "mathcolor");
/// `mathematical`
pub const MATHEMATICAL: AttributeName = AttributeName::builtin(257, "mathematical");
/// `mathsize`
pub const MATHSIZE: AttributeName = AttributeName::builtin(258, "mathsize");
/// `mathvariant`
pub const MATHVARIANT: AttributeName = AttributeName::builtin(259, "mathvariant");
/// `max`
pub const MAX: AttributeName = AttributeName::builtin(260, "max");
/// `maxlength`
pub const MAXLENGTH: AttributeName = AttributeName::builtin(261, "maxlength");
/// `maxsize`
pub const MAXSIZE: AttributeName = AttributeName::builtin(262, "maxsize");
/// `media`
pub const MEDIA: AttributeName = AttributeName::builtin(263, "media");
/// `mediummathspace`
pub const MEDIUMMATHSPACE: AttributeName = AttributeName::builtin(264, "mediummathspace");
/// `method`
pub const METHOD: AttributeName = AttributeName::builtin(265, "method");
/// `min`
pub const MIN: AttributeName = AttributeName::builtin(266, "min");
/// `minsize`
pub const MINSIZE: AttributeName = AttributeName::builtin(267, "minsize");
/// `mode`
pub const MODE: AttributeName = AttributeName::builtin(268, "mode");
/// `movablelimits`
pub const MOVABLELIMITS: AttributeName = AttributeName::builtin(269, "movablelimits");
/// `multiple`
pub const MULTIPLE: AttributeName = AttributeName::builtin(270, "multiple");
/// `name`
pub const NAME: AttributeName = AttributeName::builtin(271, "name");
/// `nargs`
pub const NARGS: AttributeName = AttributeName::builtin(272, "nargs");
/// `nohref`
pub const NOHREF: AttributeName = AttributeName::builtin(273, "nohref");
/// `noresize`
pub const NORESIZE: AttributeName = AttributeName::builtin(274, "noresize");
/// `noshade`
pub const NOSHADE: AttributeName = AttributeName::builtin(275, "noshade");
/// `notation`
pub const NOTATION: AttributeName = AttributeName::builtin(276, "notation");
/// `nowrap`
pub const NOWRAP: AttributeName = AttributeName::builtin(277, "nowrap");
/// `numoctaves`
pub const NUMOCTAVES: AttributeName = AttributeName::builtin(278, "numoctaves");
/// `object`
pub const OBJECT: AttributeName = AttributeName::builtin(279, "object");
/// `occurrence`
pub const OCCURRENCE: AttributeName = AttributeName::builtin(280, "occurrence");
/// `offset`
pub const OFFSET: AttributeName = AttributeName::builtin(281, "offset");
/// `onabort`
pub const ONABORT: AttributeName = AttributeName::builtin(282, "onabort");
/// `onactivate`
pub const ONACTIVATE: AttributeName = AttributeName::builtin(283, "onactivate");
/// `onafterprint`
pub const ONAFTERPRINT: AttributeName = AttributeName::builtin(284, "onafterprint");
/// `onafterupdate`
pub const ONAFTERUPDATE: AttributeName = AttributeName::builtin(285, "onafterupdate");
/// `onbefordeactivate`
pub const ONBEFORDEACTIVATE: AttributeName = AttributeName::builtin(286, "onbefordeactivate");
/// `onbeforeactivate`
pub const ONBEFOREACTIVATE: AttributeName = AttributeName::builtin(287, "onbeforeactivate");
/// `onbeforecopy`
pub const ONBEFORECOPY: AttributeName = AttributeName::builtin(288, "onbeforecopy");
/// `onbeforecut`
pub const ONBEFORECUT: AttributeName = AttributeName::builtin(289, "onbeforecut");
/// `onbeforeeditfocus`
pub const ONBEFOREEDITFOCUS: AttributeName = AttributeName::builtin(290, "onbeforeeditfocus");
/// `onbeforepaste`
pub const ONBEFOREPASTE: AttributeName = AttributeName::builtin(291, "onbeforepaste");
/// `onbeforeprint`
pub const ONBEFOREPRINT: AttributeName = AttributeName::builtin(292, "onbeforeprint");
/// `onbeforeunload`
pub const ONBEFOREUNLOAD: AttributeName = AttributeName::builtin(293, "onbeforeunload");
/// `onbeforeupdate`
pub const ONBEFOREUPDATE: AttributeName = AttributeName::builtin(294, "onbeforeupdate");
/// `onbegin`
pub const ONBEGIN: AttributeName = AttributeName::builtin(295, "onbegin");
/// `onblur`
pub const ONBLUR: AttributeName = AttributeName::builtin(296, "onblur");
/// `onbounce`
pub const ONBOUNCE: AttributeName = AttributeName::builtin(297, "onbounce");
/// `oncellchange`
pub const ONCELLCHANGE: AttributeName = AttributeName::builtin(298, "oncellchange");
/// `onchange`
pub const ONCHANGE: AttributeName = AttributeName::builtin(299, "onchange");
/// `onclick`
pub const ONCLICK: AttributeName = AttributeName::builtin(300, "onclick");
/// `oncontextmenu`
pub const ONCONTEXTMENU: AttributeName = AttributeName::builtin(301, "oncontextmenu");
/// `oncontrolselect`
pub const ONCONTROLSELECT: AttributeName = AttributeName::builtin(302, "oncontrolselect");
/// `oncopy`
pub const ONCOPY: AttributeName = AttributeName::builtin(303, "oncopy");
/// `oncut`
pub const ONCUT: AttributeName = AttributeName::builtin(304, "oncut");
/// `ondataavailable`
pub const ONDATAAVAILABLE: AttributeName = AttributeName::builtin(305, "ondataavailable");
/// `ondatasetchanged`
pub const ONDATASETCHANGED: AttributeName = AttributeName::builtin(306, "ondatasetchanged");
/// `ondatasetcomplete`
pub const ONDATASETCOMPLETE: AttributeName = AttributeName::builtin(307, "ondatasetcomplete");
/// `ondblclick`
pub const ONDBLCLICK: AttributeName = AttributeName::builtin(308, "ondblclick");
/// `ondeactivate`
pub const ONDEACTIVATE: AttributeName = AttributeName::builtin(309, "ondeactivate");
/// `ondrag`
pub const ONDRAG: AttributeName = AttributeName::builtin(310, "ondrag");
/// `ondragdrop`
pub const ONDRAGDROP: AttributeName = AttributeName::builtin(311, "ondragdrop");
/// `ondragend`
pub const ONDRAGEND: AttributeName = AttributeName::builtin(312, "ondragend");
/// `ondragenter`
pub const ONDRAGENTER: AttributeName = AttributeName::builtin(313, "ondragenter");
/// `ondragleave`
pub const ONDRAGLEAVE: AttributeName = AttributeName::builtin(314, "ondragleave");
/// `ondragover`
pub const ONDRAGOVER: AttributeName = AttributeName::builtin(315, "ondragover");
/// `ondragstart`
pub const ONDRAGSTART: AttributeName = AttributeName::builtin(316, "ondragstart");
/// `ondrop`
pub const ONDROP: AttributeName = AttributeName::builtin(317, "ondrop");
/// `onend`
pub const ONEND: AttributeName = AttributeName::builtin(318, "onend");
/// `onerror`
pub const ONERROR: AttributeName = AttributeName::builtin(319, "onerror");
/// `onerrorupdate`
pub const ONERRORUPDATE: AttributeName = AttributeName::builtin(320, "onerrorupdate");
/// `onfilterchange`
pub const ONFILTERCHANGE: AttributeName = AttributeName::builtin(321, "onfilterchange");
/// `onfinish`
pub const ONFINISH: AttributeName = AttributeName::builtin(322, "onfinish");
/// `onfocus`
pub const ONFOCUS: AttributeName = AttributeName::builtin(323, "onfocus");
/// `onfocusin`
pub const ONFOCUSIN: AttributeName = AttributeName::builtin(324, "onfocusin");
/// `onfocusout`
pub const ONFOCUSOUT: AttributeName = AttributeName::builtin(325, "onfocusout");
/// `onformchange`
pub const ONFORMCHANGE: AttributeName = AttributeName::builtin(326, "onformchange");
/// `onforminput`
pub const ONFORMINPUT: AttributeName = AttributeName::builtin(327, "onforminput");
/// `onhelp`
pub const ONHELP: AttributeName = AttributeName::builtin(328, "onhelp");
/// `oninput`
pub const ONINPUT: AttributeName = AttributeName::builtin(329, "oninput");
/// `oninvalid`
pub const ONINVALID: AttributeName = AttributeName::builtin(330, "oninvalid");
/// `onkeydown`
pub const ONKEYDOWN: AttributeName = AttributeName::builtin(331, "onkeydown");
/// `onkeypress`
pub const ONKEYPRESS: AttributeName = AttributeName::builtin(332, "onkeypress");
/// `onkeyup`
pub const ONKEYUP: AttributeName = AttributeName::builtin(333, "onkeyup");
/// `onload`
pub const ONLOAD: AttributeName = AttributeName::builtin(334, "onload");
/// `onlosecapture`
pub const ONLOSECAPTURE: AttributeName = AttributeName::builtin(335, "onlosecapture");
/// `onmessage`
pub const ONMESSAGE: AttributeName = AttributeName::builtin(336, "onmessage");
/// `onmousedown`
pub const ONMOUSEDOWN: AttributeName = AttributeName::builtin(337, "onmousedown");
/// `onmouseenter`
pub const ONMOUSEENTER: AttributeName = AttributeName::builtin(338, "onmouseenter");
/// `onmouseleave`
pub const ONMOUSELEAVE: AttributeName = AttributeName::builtin(339, "onmouseleave");
/// `onmousemove`
pub const ONMOUSEMOVE: AttributeName = AttributeName::builtin(340, "onmousemove");
/// `onmouseout`
pub const ONMOUSEOUT: AttributeName = AttributeName::builtin(341, "onmouseout");
/// `onmouseover`
pub const ONMOUSEOVER: AttributeName = AttributeName::builtin(342, "onmouseover");
/// `onmouseup`
pub const ONMOUSEUP: AttributeName = AttributeName::builtin(343, "onmouseup");
/// `onmousewheel`
pub const ONMOUSEWHEEL: AttributeName = AttributeName::builtin(344, "onmousewheel");
/// `onmove`
pub const ONMOVE: AttributeName = AttributeName::builtin(345, "onmove");
/// `onmoveend`
pub const ONMOVEEND: AttributeName = AttributeName::builtin(346, "onmoveend");
/// `onmovestart`
pub const ONMOVESTART: AttributeName = AttributeName::builtin(347, "onmovestart");
/// `onpaste`
pub const ONPASTE: AttributeName = AttributeName::builtin(348, "onpaste");
/// `onpropertychange`
pub const ONPROPERTYCHANGE: AttributeName = AttributeName::builtin(349, "onpropertychange");
/// `onreadystatechange`
pub const ONREADYSTATECHANGE: AttributeName = AttributeName::builtin(350, "onreadystatechange");
/// `onrepeat`
pub const ONREPEAT: AttributeName = AttributeName::builtin(351, "onrepeat");
/// `onreset`
pub const ONRESET: AttributeName = AttributeName::builtin(352, "onreset");
/// `onresize`
pub const ONRESIZE: AttributeName = AttributeName::builtin(353, "onresize");
/// `onrowenter`
pub const ONROWENTER: AttributeName = AttributeName::builtin(354, "onrowenter");
/// `onrowexit`
pub const ONROWEXIT: AttributeName = AttributeName::builtin(355, "onrowexit");
/// `onrowsdelete`
pub const ONROWSDELETE: AttributeName = AttributeName::builtin(356, "onrowsdelete");
/// `onrowsinserted`
pub const ONROWSINSERTED: AttributeName = AttributeName::builtin(357, "onrowsinserted");
/// `onscroll`
pub const ONSCROLL: AttributeName = AttributeName::builtin(358, "onscroll");
/// `onselect`
pub const ONSELECT: AttributeName = AttributeName::builtin(359, "onselect");
/// `onselectstart`
pub const ONSELECTSTART: AttributeName = AttributeName::builtin(360, "onselectstart");
/// `onstart`
pub const ONSTART: AttributeName = AttributeName::builtin(361, "onstart");
/// `onstop`
pub const ONSTOP: AttributeName = AttributeName::builtin(362, "onstop");
/// `onsubmit`
pub const ONSUBMIT: AttributeName = AttributeName::builtin(363, "onsubmit");
/// `onunload`
pub const ONUNLOAD: AttributeName = AttributeName::builtin(364, "onunload");
/// `onzoom`
pub const ONZOOM: AttributeName = AttributeName::builtin(365, "onzoom");
/// `opacity`
pub const OPACITY: AttributeName = AttributeName::builtin(366, "opacity");
/// `open`
pub const OPEN: AttributeName = AttributeName::builtin(367, "open");
/// `operator`
pub const OPERATOR: AttributeName = AttributeName::builtin(368, "operator");
/// `optimum`
pub const OPTIMUM: AttributeName = AttributeName::builtin(369, "optimum");
/// `order`
pub const ORDER: AttributeName = AttributeName::builtin(370, "order");
/// `orient`
pub const ORIENT: AttributeName = AttributeName::builtin(371, "orient");
/// `orientation`
pub const ORIENTATION: AttributeName = AttributeName::builtin(372, "orientation");
/// `origin`
pub const ORIGIN: AttributeName = AttributeName::builtin(373, "origin");
/// `other`
pub const OTHER: AttributeName = AttributeName::builtin(374, "other");
/// `overflow`
pub const OVERFLOW: AttributeName = AttributeName::builtin(375, "overflow");
/// `overline-position`
pub const OVERLINE_POSITION: AttributeName = AttributeName::builtin(376, "overline-position");
/// `overline-thickness`
pub const OVERLINE_THICKNESS: AttributeName = AttributeName::builtin(377, "overline-thickness");
/// `panose-1`
pub const PANOSE_1: AttributeName = AttributeName::builtin(378, "panose-1");
/// `path`
pub const PATH: AttributeName = AttributeName::builtin(379, "path");
/// `pathlength`
pub const PATHLENGTH: AttributeName = AttributeName::builtin(380, "pathlength");
/// `pattern`
pub const PATTERN: AttributeName = AttributeName::builtin(381, "pattern");
/// `patterncontentunits`
pub const PATTERNCONTENTUNITS: AttributeName = AttributeName::builtin(382, "patterncontentunits");
/// `patterntransform`
pub const PATTERNTRANSFORM: AttributeName = AttributeName::builtin(383, "patterntransform");
/// `patternunits`
pub const PATTERNUNITS: AttributeName = AttributeName::builtin(384, "patternunits");
/// `ping`
pub const PING: AttributeName = AttributeName::builtin(385, "ping");
/// `pointer-events`
pub const POINTER_EVENTS: AttributeName = AttributeName::builtin(386, "pointer-events");
/// `points`
pub const POINTS: AttributeName = AttributeName::builtin(387, "points");
/// `pointsatx`
pub const POINTSATX: AttributeName = AttributeName::builtin(388, "pointsatx");
/// `pointsaty`
pub const POINTSATY: AttributeName = AttributeName::builtin(389, "pointsaty");
/// `pointsatz`
pub const POINTSATZ: AttributeName = AttributeName::builtin(390, "pointsatz");
/// `poster`
pub const POSTER: AttributeName = AttributeName::builtin(391, "poster");
/// `preservealpha`
pub const PRESERVEALPHA: AttributeName = AttributeName::builtin(392, "preservealpha");
/// `preserveaspectratio`
pub const PRESERVEASPECTRATIO: AttributeName = AttributeName::builtin(393, "preserveaspectratio");
/// `primitiveunits`
pub const PRIMITIVEUNITS: AttributeName = AttributeName::builtin(394, "primitiveunits");
/// `profile`
pub const PROFILE: AttributeName = AttributeName::builtin(395, "profile");
/// `prompt`
pub const PROMPT: AttributeName = AttributeName::builtin(396, "prompt");
/// `r`
pub const R: AttributeName = AttributeName::builtin(397, "r");
/// `radiogroup`
pub const RADIOGROUP: AttributeName = AttributeName::builtin(398, "radiogroup");
/// `radius`
pub const RADIUS: AttributeName = AttributeName::builtin(399, "radius");
/// `readonly`
pub const READONLY: AttributeName = AttributeName::builtin(400, "readonly");
/// `refx`
pub const REFX: AttributeName = AttributeName::builtin(401, "refx");
/// `refy`
pub const REFY: AttributeName = AttributeName::builtin(402, "refy");
/// `rel`
pub const REL: AttributeName = AttributeName::builtin(403, "rel");
/// `rendering-intent`
pub const RENDERING_INTENT: AttributeName = AttributeName::builtin(404, "rendering-intent");
/// `repeat`
pub const REPEAT: AttributeName = AttributeName::builtin(405, "repeat");
/// `repeat-max`
pub const REPEAT_MAX: AttributeName = AttributeName::builtin(406, "repeat-max");
/// `repeat-min`
pub const REPEAT_MIN: AttributeName = AttributeName::builtin(407, "repeat-min");
/// `repeat-start`
pub const REPEAT_START: AttributeName = AttributeName::builtin(408, "repeat-start");
/// `repeat-template`
pub const REPEAT_TEMPLATE: AttributeName = AttributeName::builtin(409, "repeat-template");
/// `repeatcount`
pub const REPEATCOUNT: AttributeName = AttributeName::builtin(410, "repeatcount");
/// `repeatdur`
pub const REPEATDUR: AttributeName = AttributeName::builtin(411, "repeatdur");
/// `replace`
pub const REPLACE: AttributeName = AttributeName::builtin(412, "replace");
/// `required`
pub const REQUIRED: AttributeName = AttributeName::builtin(413, "required");
/// `requiredextensions`
pub const REQUIREDEXTENSIONS: AttributeName = AttributeName::builtin(414, "requiredextensions");
/// `requiredfeatures`
pub const REQUIREDFEATURES: AttributeName = AttributeName::builtin(415, "requiredfeatures");
/// `restart`
pub const RESTART: AttributeName = AttributeName::builtin(416, "restart");
/// `result`
pub const RESULT: AttributeName = AttributeName::builtin(417, "result");
/// `rev`
pub const REV: AttributeName = AttributeName::builtin(418, "rev");
/// `role`
pub const ROLE: AttributeName = AttributeName::builtin(419, "role");
/// `rotate`
pub const ROTATE: AttributeName = AttributeName::builtin(420, "rotate");
/// `rowalign`
pub const ROWALIGN: AttributeName = AttributeName::builtin(421, "rowalign");
/// `rowlines`
pub const ROWLINES: AttributeName = AttributeName::builtin(422, "rowlines");
/// `rows`
pub const ROWS: AttributeName = AttributeName::builtin(423, "rows");
/// `rowspacing`
pub const ROWSPACING: AttributeName = AttributeName::builtin(424, "rowspacing");
/// `rowspan`
pub const ROWSPAN: AttributeName = AttributeName::builtin(425, "rowspan");
/// `rquote`
pub const RQUOTE: AttributeName = AttributeName::builtin(426, "rquote");
/// `rspace`
pub const RSPACE: AttributeName = AttributeName::builtin(427, "rspace");
/// `rt`
pub const RT: AttributeName = AttributeName::builtin(428, "rt");
/// `rules`
pub const RULES: AttributeName = AttributeName::builtin(429, "rules");
/// `rx`
pub const RX: AttributeName = AttributeName::builtin(430, "rx");
/// `ry`
pub const RY: AttributeName = AttributeName::builtin(431, "ry");
/// `sandbox`
pub const SANDBOX: AttributeName = AttributeName::builtin(432, "sandbox");
/// `scale`
pub const SCALE: AttributeName = AttributeName::builtin(433, "scale");
/// `scheme`
pub const SCHEME: AttributeName = AttributeName::builtin(434, "scheme");
/// `scope`
pub const SCOPE: AttributeName = AttributeName::builtin(435, "scope");
/// `scoped`
pub const SCOPED: AttributeName = AttributeName::builtin(436, "scoped");
/// `scriptlevel`
pub const SCRIPTLEVEL: AttributeName = AttributeName::builtin(437, "scriptlevel");
/// `scriptminsize`
pub const SCRIPTMINSIZE: AttributeName = AttributeName::builtin(438, "scriptminsize");
/// `scriptsizemultiplier`
pub const SCRIPTSIZEMULTIPLIER: AttributeName = AttributeName::builtin(439, "scriptsizemultiplier");
/// `scrolldelay`
pub const SCROLLDELAY: AttributeName = AttributeName::builtin(440, "scrolldelay");
/// `scrolling`
pub const SCROLLING: AttributeName = AttributeName::builtin(441, "scrolling");
/// `seamless`
pub const SEAMLESS: AttributeName = AttributeName::builtin(442, "seamless");
/// `seed`
pub const SEED: AttributeName = AttributeName::builtin(443, "seed");
/// `selected`
pub const SELECTED: AttributeName = AttributeName::builtin(444, "selected");
/// `selection`
pub const SELECTION: AttributeName = AttributeName::builtin(445, "selection");
/// `separator`
pub const SEPARATOR: AttributeName = AttributeName::builtin(446, "separator");
/// `separators`
pub const SEPARATORS: AttributeName = AttributeName::builtin(447, "separators");
/// `shape`
pub const SHAPE: AttributeName = AttributeName::builtin(448, "shape");
/// `shape-rendering`
pub const SHAPE_RENDERING: AttributeName = AttributeName::builtin(449, "shape-rendering");
/// `size`
pub const SIZE: AttributeName = AttributeName::builtin(450, "size");
/// `slope`
pub const SLOPE: AttributeName = AttributeName::builtin(451, "slope");
/// `spacing`
pub const SPACING: AttributeName = AttributeName::builtin(452, "spacing");
/// `span`
pub const SPAN: AttributeName = AttributeName::builtin(453, "span");
/// `specification`
pub const SPECIFICATION: AttributeName = AttributeName::builtin(454, "specification");
/// `specularconstant`
pub const SPECULARCONSTANT: AttributeName = AttributeName::builtin(455, "specularconstant");
/// `specularexponent`
pub const SPECULAREXPONENT: AttributeName = AttributeName::builtin(456, "specularexponent");
/// `speed`
pub const SPEED: AttributeName = AttributeName::builtin(457, "speed");
/// `spreadmethod`
pub const SPREADMETHOD: AttributeName = AttributeName::builtin(458, "spreadmethod");
/// `src`
pub const SRC: AttributeName = AttributeName::builtin(459, "src");
/// `standby`
pub const STANDBY: AttributeName = AttributeName::builtin(460, "standby");
/// `start`
pub const START: AttributeName = AttributeName::builtin(461, "start");
/// `startoffset`
pub const STARTOFFSET: AttributeName = AttributeName::builtin(462, "startoffset");
/// `stddeviation`
pub const STDDEVIATION: AttributeName = AttributeName::builtin(463, "stddeviation");
/// `stemh`
pub const STEMH: AttributeName = AttributeName::builtin(464, "stemh");
/// `stemv`
pub const STEMV: AttributeName = AttributeName::builtin(465, "stemv");
/// `step`
pub const STEP: AttributeName = AttributeName::builtin(466, "step");
/// `stitchtiles`
pub const STITCHTILES: AttributeName = AttributeName::builtin(467, "stitchtiles");
/// `stop-color`
pub const STOP_COLOR: AttributeName = AttributeName::builtin(468, "stop-color");
/// `stop-opacity`
pub const STOP_OPACITY: AttributeName = AttributeName::builtin(469, "stop-opacity");
/// `stretchy`
pub const STRETCHY: AttributeName = AttributeName::builtin(470, "stretchy");
/// `strikethrough-position`
pub const STRIKETHROUGH_POSITION: AttributeName = AttributeName::builtin(471, "strikethrough-position");
/// `strikethrough-thickness`
pub const STRIKETHROUGH_THICKNESS: AttributeName = AttributeName::builtin(472, "strikethrough-thickness");
/// `string`
pub const STRING: AttributeName = AttributeName::builtin(473, "string");
/// `stroke`
pub const STROKE: AttributeName = AttributeName::builtin(474, "stroke");
/// `stroke-dasharray`
pub const STROKE_DASHARRAY: AttributeName = AttributeName::builtin(475, "stroke-dasharray");
/// `stroke-dashoffset`
pub const STROKE_DASHOFFSET: AttributeName = AttributeName::builtin(476, "stroke-dashoffset");
/// `stroke-linecap`
pub const STROKE_LINECAP: AttributeName = AttributeName::builtin(477, "stroke-linecap");
/// `stroke-linejoin`
pub const STROKE_LINEJOIN: AttributeName = AttributeName::builtin(478, "stroke-linejoin");
/// `stroke-miterlimit`
pub const STROKE_MITERLIMIT: AttributeName = AttributeName::builtin(479, "stroke-miterlimit");
/// `stroke-opacity`
pub const STROKE_OPACITY: AttributeName = AttributeName::builtin(480, "stroke-opacity");
/// `stroke-width`
pub const STROKE_WIDTH: AttributeName = AttributeName::builtin(481, "stroke-width");
/// `style`
pub const STYLE: AttributeName = AttributeName::builtin(482, "style");
/// `subscriptshift`
pub const SUBSCRIPTSHIFT: AttributeName = AttributeName::builtin(483, "subscriptshift");
/// `summary`
pub const SUMMARY: AttributeName = AttributeName::builtin(484, "summary");
/// `superscriptshift`
pub const SUPERSCRIPTSHIFT: AttributeName = AttributeName::builtin(485, "superscriptshift");
/// `surfacescale`
pub const SURFACESCALE: AttributeName = AttributeName::builtin(486, "surfacescale");
/// `symmetric`
pub const SYMMETRIC: AttributeName = AttributeName::builtin(487, "symmetric");
/// `systemlanguage`
pub const SYSTEMLANGUAGE: AttributeName = AttributeName::builtin(488, "systemlanguage");
/// `tabindex`
pub const TABINDEX: AttributeName = AttributeName::builtin(489, "tabindex");
/// `tablevalues`
pub const TABLEVALUES: AttributeName = AttributeName::builtin(490, "tablevalues");
/// `target`
pub const TARGET: AttributeName = AttributeName::builtin(491, "target");
/// `targetx`
pub const TARGETX: AttributeName = AttributeName::builtin(492, "targetx");
/// `targety`
pub const TARGETY: AttributeName = AttributeName::builtin(493, "targety");
/// `template`
pub const TEMPLATE: AttributeName = AttributeName::builtin(494, "template");
/// `text`
pub const TEXT: AttributeName = AttributeName::builtin(495, "text");
/// `text-anchor`
pub const TEXT_ANCHOR: AttributeName = AttributeName::builtin(496, "text-anchor");
/// `text-decoration`
pub const TEXT_DECORATION: AttributeName = AttributeName::builtin(497, "text-decoration");
/// `text-rendering`
pub const TEXT_RENDERING: AttributeName = AttributeName::builtin(498, "text-rendering");
/// `textlength`
pub const TEXTLENGTH: AttributeName = AttributeName::builtin(499, "textlength");
/// `thickmathspace`
pub const THICKMATHSPACE: AttributeName = AttributeName::builtin(500, "thickmathspace");
/// `thinmathspace`
pub const THINMATHSPACE: AttributeName = AttributeName::builtin(501, "thinmathspace");
/// `title`
pub const TITLE: AttributeName = AttributeName::builtin(502, "title");
/// `to`
pub const TO: AttributeName = AttributeName::builtin(503, "to");
/// `transform`
pub const TRANSFORM: AttributeName = AttributeName::builtin(504, "transform");
/// `type`
pub const TYPE: AttributeName = AttributeName::builtin(505, "type");
/// `u1`
pub const U1: AttributeName = AttributeName::builtin(506, "u1");
/// `u2`
pub const U2: AttributeName = AttributeName::builtin(507, "u2");
/// `underline-position`
pub const UNDERLINE_POSITION: AttributeName = AttributeName::builtin(508, "underline-position");
/// `underline-thickness`
pub const UNDERLINE_THICKNESS: AttributeName = AttributeName::builtin(509, "underline-thickness");
/// `unicode`
pub const UNICODE: AttributeName = AttributeName::builtin(510, "unicode");
/// `unicode-bidi`
pub const UNICODE_BIDI: AttributeName = AttributeName::builtin(511, "unicode-bidi");
/// `unicode-range`
pub const UNICODE_RANGE: AttributeName = AttributeName::builtin(512, "unicode-range");
/// `units-per-em`
pub const UNITS_PER_EM: AttributeName = AttributeName::builtin(513, "units-per-em");
/// `unselectable`
pub const UNSELECTABLE: AttributeName = AttributeName::builtin(514, "unselectable");
/// `usemap`
pub const USEMAP: AttributeName = AttributeName::builtin(515, "usemap");
/// `v-alphabetic`
pub const V_ALPHABETIC: AttributeName = AttributeName::builtin(516, "v-alphabetic");
/// `v-hanging`
pub const V_HANGING: AttributeName = AttributeName::builtin(517, "v-hanging");
/// `v-ideographic`
pub const V_IDEOGRAPHIC: AttributeName = AttributeName::builtin(518, "v-ideographic");
/// `v-mathematical`
pub const V_MATHEMATICAL: AttributeName = AttributeName::builtin(519, "v-mathematical");
/// `valign`
pub const VALIGN: AttributeName = AttributeName::builtin(520, "valign");
/// `value`
pub const VALUE: AttributeName = AttributeName::builtin(521, "value");
/// `value:`
pub const VALUE_: AttributeName = AttributeName::builtin(522, "value:");
/// `values`
pub const VALUES: AttributeName = AttributeName::builtin(523, "values");
/// `valuetype`
pub const VALUETYPE: AttributeName = AttributeName::builtin(524, "valuetype");
/// `version`
pub const VERSION: AttributeName = AttributeName::builtin(525, "version");
/// `vert-adv-y`
pub const VERT_ADV_Y: AttributeName = AttributeName::builtin(526, "vert-adv-y");
/// `vert-origin-x`
pub const VERT_ORIGIN_X: AttributeName = AttributeName::builtin(527, "vert-origin-x");
/// `vert-origin-y`
pub const VERT_ORIGIN_Y: AttributeName = AttributeName::builtin(528, "vert-origin-y");
/// `verythickmathspace`
pub const VERYTHICKMATHSPACE: AttributeName = AttributeName::builtin(529, "verythickmathspace");
/// `verythinmathspace`
pub const VERYTHINMATHSPACE: AttributeName = AttributeName::builtin(530, "verythinmathspace");
/// `veryverythickmathspace`
pub const VERYVERYTHICKMATHSPACE: AttributeName = AttributeName::builtin(531, "veryverythickmathspace");
/// `veryverythinmathspace`
pub const VERYVERYTHINMATHSPACE: AttributeName = AttributeName::builtin(532, "veryverythinmathspace");
/// `viewbox`
pub const VIEWBOX: AttributeName = AttributeName::builtin(533, "viewbox");
/// `viewtarget`
pub const VIEWTARGET: AttributeName = AttributeName::builtin(534, "viewtarget");
/// `visibility`
pub const VISIBILITY: AttributeName = AttributeName::builtin(535, "visibility");
/// `vlink`
pub const VLINK: AttributeName = AttributeName::builtin(536, "vlink");
/// `vspace`
pub const VSPACE: AttributeName = AttributeName::builtin(537, "vspace");
/// `when`
pub const WHEN: AttributeName = AttributeName::builtin(538, "when");
/// `width`
pub const WIDTH: AttributeName = AttributeName::builtin(539, "width");
/// `widths`
pub const WIDTHS: AttributeName = AttributeName::builtin(540, "widths");
/// `word-spacing`
pub const WORD_SPACING: AttributeName = AttributeName::builtin(541, "word-spacing");
/// `wrap`
pub const WRAP: AttributeName = AttributeName::builtin(542, "wrap");
/// `writing-mode`
pub const WRITING_MODE: AttributeName = AttributeName::builtin(543, "writing-mode");
/// `x`
pub const X: AttributeName = AttributeName::builtin(544, "x");
/// `x-height`
pub const X_HEIGHT: AttributeName = AttributeName::builtin(545, "x-height");
/// `x1`
pub const X1: AttributeName = AttributeName::builtin(546, "x1");
/// `x2`
pub const X2: AttributeName = AttributeName::builtin(547, "x2");
/// `xchannelselector`
pub const XCHANNELSELECTOR: AttributeName = AttributeName::builtin(548, "xchannelselector");
/// `xlink:actuate`
pub const XLINK_ACTUATE: AttributeName = AttributeName::builtin(549, "xlink:actuate");
/// `xlink:arcrole`
pub const XLINK_ARCROLE: AttributeName = AttributeName::builtin(550, "xlink:arcrole");
/// `xlink:href`
pub const XLINK_HREF: AttributeName = AttributeName::builtin(551, "xlink:href");
/// `xlink:role`
pub const XLINK_ROLE: AttributeName = AttributeName::builtin(552, "xlink:role");
/// `xlink:show`
pub const XLINK_SHOW: AttributeName = AttributeName::builtin(553, "xlink:show");
/// `xlink:title`
pub const XLINK_TITLE: AttributeName = AttributeName::builtin(554, "xlink:title");
/// `xlink:type`
pub const XLINK_TYPE: AttributeName = AttributeName::builtin(555, "xlink:type");
/// `xml:base`
pub const XML_BASE: AttributeName = AttributeName::builtin(556, "xml:base");
/// `xml:lang`
pub const XML_LANG: AttributeName = AttributeName::builtin(557, "xml:lang");
/// `xml:space`
pub const XML_SPACE: AttributeName = AttributeName::builtin(558, "xml:space");
/// `xmlns`
pub const XMLNS: AttributeName = AttributeName::builtin(559, "xmlns");
/// `xmlns:xlink`
pub const XMLNS_XLINK: AttributeName = AttributeName::builtin(560, "xmlns:xlink");
/// `xref`
pub const XREF: AttributeName = AttributeName::builtin(561, "xref");
/// `y`
pub const Y: AttributeName = AttributeName::builtin(562, "y");
/// `y1`
pub const Y1: AttributeName = AttributeName::builtin(563, "y1");
/// `y2`
pub const Y2: AttributeName = AttributeName::builtin(564, "y2");
/// `ychannelselector`
pub const YCHANNELSELECTOR: AttributeName = AttributeName::builtin(565, "ychannelselector");
/// `z`
pub const Z: AttributeName = AttributeName::builtin(566, "z");
/// `zoomandpan`
pub const ZOOMANDPAN: AttributeName = AttributeName::builtin(567, "zoomandpan");
