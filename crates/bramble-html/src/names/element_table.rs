// @generated by tools/gen_names.py. Do not edit by hand.

use super::element::{ElementInfo, ElementName, Group};

/// Number of built-in element names. Custom names get ids from here up.
pub const BUILTIN_ELEMENT_COUNT: u32 = 393;

/// Built-in element names, sorted by lowercase spelling (byte order).
pub(crate) static ELEMENTS: [ElementInfo; 393] = [
    ElementInfo::new("a", "a", Group::A, false, false, false),
    ElementInfo::new("abbr", "abbr", Group::Other, false, false, false),
    ElementInfo::new("abs", "abs", Group::Other, false, false, false),
    ElementInfo::new("acronym", "acronym", Group::Other, false, false, false),
    ElementInfo::new("address", "address", Group::Fieldset, true, false, false),
    ElementInfo::new("altglyph", "altGlyph", Group::Other, false, false, false),
    ElementInfo::new("altglyphdef", "altGlyphDef", Group::Other, false, false, false),
    ElementInfo::new("altglyphitem", "altGlyphItem", Group::Other, false, false, false),
    ElementInfo::new("and", "and", Group::Other, false, false, false),
    ElementInfo::new("animate", "animate", Group::Other, false, false, false),
    ElementInfo::new("animatecolor", "animateColor", Group::Other, false, false, false),
    ElementInfo::new("animatemotion", "animateMotion", Group::Other, false, false, false),
    ElementInfo::new("animatetransform", "animateTransform", Group::Other, false, false, false),
    ElementInfo::new("animation", "animation", Group::Other, false, false, false),
    ElementInfo::new("annotation", "annotation", Group::Other, false, false, false),
    ElementInfo::new("annotation-xml", "annotation-xml", Group::Other, false, false, false),
    ElementInfo::new("applet", "applet", Group::Object, false, true, false),
    ElementInfo::new("apply", "apply", Group::Other, false, false, false),
    ElementInfo::new("approx", "approx", Group::Other, false, false, false),
    ElementInfo::new("arccos", "arccos", Group::Other, false, false, false),
    ElementInfo::new("arccosh", "arccosh", Group::Other, false, false, false),
    ElementInfo::new("arccot", "arccot", Group::Other, false, false, false),
    ElementInfo::new("arccoth", "arccoth", Group::Other, false, false, false),
    ElementInfo::new("arccsc", "arccsc", Group::Other, false, false, false),
    ElementInfo::new("arccsch", "arccsch", Group::Other, false, false, false),
    ElementInfo::new("arcsec", "arcsec", Group::Other, false, false, false),
    ElementInfo::new("arcsech", "arcsech", Group::Other, false, false, false),
    ElementInfo::new("arcsin", "arcsin", Group::Other, false, false, false),
    ElementInfo::new("arcsinh", "arcsinh", Group::Other, false, false, false),
    ElementInfo::new("arctan", "arctan", Group::Other, false, false, false),
    ElementInfo::new("arctanh", "arctanh", Group::Other, false, false, false),
    ElementInfo::new("area", "area", Group::Area, true, false, false),
    ElementInfo::new("arg", "arg", Group::Other, false, false, false),
    ElementInfo::new("article", "article", Group::Div, true, false, false),
    ElementInfo::new("aside", "aside", Group::Div, true, false, false),
    ElementInfo::new("audio", "audio", Group::Other, false, false, false),
    ElementInfo::new("b", "b", Group::B, false, false, false),
    ElementInfo::new("base", "base", Group::Base, true, false, false),
    ElementInfo::new("basefont", "basefont", Group::Area, true, false, false),
    ElementInfo::new("bdo", "bdo", Group::Other, false, false, false),
    ElementInfo::new("bgsound", "bgsound", Group::Area, true, false, false),
    ElementInfo::new("big", "big", Group::B, false, false, false),
    ElementInfo::new("blockquote", "blockquote", Group::Div, true, false, false),
    ElementInfo::new("body", "body", Group::Body, true, false, false),
    ElementInfo::new("br", "br", Group::Br, true, false, false),
    ElementInfo::new("button", "button", Group::Button, false, true, false),
    ElementInfo::new("bvar", "bvar", Group::Other, false, false, false),
    ElementInfo::new("canvas", "canvas", Group::Other, false, false, false),
    ElementInfo::new("caption", "caption", Group::Caption, false, true, false),
    ElementInfo::new("card", "card", Group::Other, false, false, false),
    ElementInfo::new("cartesianproduct", "cartesianproduct", Group::Other, false, false, false),
    ElementInfo::new("ceiling", "ceiling", Group::Other, false, false, false),
    ElementInfo::new("center", "center", Group::Div, true, false, false),
    ElementInfo::new("ci", "ci", Group::Other, false, false, false),
    ElementInfo::new("circle", "circle", Group::Other, false, false, false),
    ElementInfo::new("cite", "cite", Group::Other, false, false, false),
    ElementInfo::new("clippath", "clipPath", Group::Other, false, false, false),
    ElementInfo::new("cn", "cn", Group::Other, false, false, false),
    ElementInfo::new("code", "code", Group::Ruby, false, false, false),
    ElementInfo::new("codomain", "codomain", Group::Other, false, false, false),
    ElementInfo::new("col", "col", Group::Col, true, false, false),
    ElementInfo::new("colgroup", "colgroup", Group::Colgroup, true, false, false),
    ElementInfo::new("color-profile", "color-profile", Group::Other, false, false, false),
    ElementInfo::new("command", "command", Group::Other, false, false, false),
    ElementInfo::new("complexes", "complexes", Group::Other, false, false, false),
    ElementInfo::new("compose", "compose", Group::Other, false, false, false),
    ElementInfo::new("condition", "condition", Group::Other, false, false, false),
    ElementInfo::new("conjugate", "conjugate", Group::Other, false, false, false),
    ElementInfo::new("cos", "cos", Group::Other, false, false, false),
    ElementInfo::new("cosh", "cosh", Group::Other, false, false, false),
    ElementInfo::new("cot", "cot", Group::Other, false, false, false),
    ElementInfo::new("coth", "coth", Group::Other, false, false, false),
    ElementInfo::new("csc", "csc", Group::Other, false, false, false),
    ElementInfo::new("csch", "csch", Group::Other, false, false, false),
    ElementInfo::new("csymbol", "csymbol", Group::Other, false, false, false),
    ElementInfo::new("curl", "curl", Group::Other, false, false, false),
    ElementInfo::new("cursor", "cursor", Group::Other, false, false, false),
    ElementInfo::new("datagrid", "datagrid", Group::Other, false, false, false),
    ElementInfo::new("datatemplate", "datatemplate", Group::Other, false, false, false),
    ElementInfo::new("dd", "dd", Group::Dd, true, false, false),
    ElementInfo::new("declare", "declare", Group::Other, false, false, false),
    ElementInfo::new("definition-src", "definition-src", Group::Other, false, false, false),
    ElementInfo::new("defs", "defs", Group::Other, false, false, false),
    ElementInfo::new("degree", "degree", Group::Other, false, false, false),
    ElementInfo::new("del", "del", Group::Other, false, false, false),
    ElementInfo::new("desc", "desc", Group::Other, false, false, false),
    ElementInfo::new("details", "details", Group::Div, true, false, false),
    ElementInfo::new("determinant", "determinant", Group::Other, false, false, false),
    ElementInfo::new("dfn", "dfn", Group::Other, false, false, false),
    ElementInfo::new("dialog", "dialog", Group::Div, true, false, false),
    ElementInfo::new("diff", "diff", Group::Other, false, false, false),
    ElementInfo::new("dir", "dir", Group::Fieldset, true, false, false),
    ElementInfo::new("discard", "discard", Group::Other, false, false, false),
    ElementInfo::new("div", "div", Group::Div, true, false, false),
    ElementInfo::new("divergence", "divergence", Group::Other, false, false, false),
    ElementInfo::new("divide", "divide", Group::Other, false, false, false),
    ElementInfo::new("dl", "dl", Group::Ol, true, false, false),
    ElementInfo::new("domain", "domain", Group::Other, false, false, false),
    ElementInfo::new("domainofapplication", "domainofapplication", Group::Other, false, false, false),
    ElementInfo::new("dt", "dt", Group::Dd, true, false, false),
    ElementInfo::new("ellipse", "ellipse", Group::Other, false, false, false),
    ElementInfo::new("em", "em", Group::B, false, false, false),
    ElementInfo::new("embed", "embed", Group::Img, true, false, false),
    ElementInfo::new("emptyset", "emptyset", Group::Other, false, false, false),
    ElementInfo::new("eq", "eq", Group::Other, false, false, false),
    ElementInfo::new("equivalent", "equivalent", Group::Other, false, false, false),
    ElementInfo::new("eulergamma", "eulergamma", Group::Other, false, false, false),
    ElementInfo::new("event-source", "event-source", Group::Other, false, false, false),
    ElementInfo::new("exists", "exists", Group::Other, false, false, false),
    ElementInfo::new("exp", "exp", Group::Other, false, false, false),
    ElementInfo::new("exponentiale", "exponentiale", Group::Other, false, false, false),
    ElementInfo::new("factorial", "factorial", Group::Other, false, false, false),
    ElementInfo::new("factorof", "factorof", Group::Other, false, false, false),
    ElementInfo::new("false", "false", Group::Other, false, false, false),
    ElementInfo::new("feblend", "feBlend", Group::Other, false, false, false),
    ElementInfo::new("fecolormatrix", "feColorMatrix", Group::Other, false, false, false),
    ElementInfo::new("fecomponenttransfer", "feComponentTransfer", Group::Other, false, false, false),
    ElementInfo::new("fecomposite", "feComposite", Group::Other, false, false, false),
    ElementInfo::new("feconvolvematrix", "feConvolveMatrix", Group::Other, false, false, false),
    ElementInfo::new("fediffuselighting", "feDiffuseLighting", Group::Other, false, false, false),
    ElementInfo::new("fedisplacementmap", "feDisplacementMap", Group::Other, false, false, false),
    ElementInfo::new("fedistantlight", "feDistantLight", Group::Other, false, false, false),
    ElementInfo::new("feflood", "feFlood", Group::Other, false, false, false),
    ElementInfo::new("fefunca", "feFuncA", Group::Other, false, false, false),
    ElementInfo::new("fefuncb", "feFuncB", Group::Other, false, false, false),
    ElementInfo::new("fefuncg", "feFuncG", Group::Other, false, false, false),
    ElementInfo::new("fefuncr", "feFuncR", Group::Other, false, false, false),
    ElementInfo::new("fegaussianblur", "feGaussianBlur", Group::Other, false, false, false),
    ElementInfo::new("feimage", "feImage", Group::Other, false, false, false),
    ElementInfo::new("femerge", "feMerge", Group::Other, false, false, false),
    ElementInfo::new("femergenode", "feMergeNode", Group::Other, false, false, false),
    ElementInfo::new("femorphology", "feMorphology", Group::Other, false, false, false),
    ElementInfo::new("feoffset", "feOffset", Group::Other, false, false, false),
    ElementInfo::new("fepointlight", "fePointLight", Group::Other, false, false, false),
    ElementInfo::new("fespecularlighting", "feSpecularLighting", Group::Other, false, false, false),
    ElementInfo::new("fespotlight", "feSpotLight", Group::Other, false, false, false),
    ElementInfo::new("fetile", "feTile", Group::Other, false, false, false),
    ElementInfo::new("feturbulence", "feTurbulence", Group::Other, false, false, false),
    ElementInfo::new("fieldset", "fieldset", Group::Fieldset, true, false, false),
    ElementInfo::new("figcaption", "figcaption", Group::Div, true, false, false),
    ElementInfo::new("figure", "figure", Group::Div, true, false, false),
    ElementInfo::new("filter", "filter", Group::Other, false, false, false),
    ElementInfo::new("floor", "floor", Group::Other, false, false, false),
    ElementInfo::new("fn", "fn", Group::Other, false, false, false),
    ElementInfo::new("font", "font", Group::B, false, false, false),
    ElementInfo::new("font-face", "font-face", Group::Other, false, false, false),
    ElementInfo::new("font-face-format", "font-face-format", Group::Other, false, false, false),
    ElementInfo::new("font-face-name", "font-face-name", Group::Other, false, false, false),
    ElementInfo::new("font-face-src", "font-face-src", Group::Other, false, false, false),
    ElementInfo::new("font-face-uri", "font-face-uri", Group::Other, false, false, false),
    ElementInfo::new("footer", "footer", Group::Div, true, false, false),
    ElementInfo::new("forall", "forall", Group::Other, false, false, false),
    ElementInfo::new("foreignobject", "foreignObject", Group::Other, false, false, false),
    ElementInfo::new("form", "form", Group::Form, true, false, false),
    ElementInfo::new("frame", "frame", Group::Frame, true, false, false),
    ElementInfo::new("frameset", "frameset", Group::Frameset, true, false, false),
    ElementInfo::new("g", "g", Group::Other, false, false, false),
    ElementInfo::new("gcd", "gcd", Group::Other, false, false, false),
    ElementInfo::new("geq", "geq", Group::Other, false, false, false),
    ElementInfo::new("glyph", "glyph", Group::Other, false, false, false),
    ElementInfo::new("glyphref", "glyphRef", Group::Other, false, false, false),
    ElementInfo::new("grad", "grad", Group::Other, false, false, false),
    ElementInfo::new("gt", "gt", Group::Other, false, false, false),
    ElementInfo::new("h1", "h1", Group::Heading, true, false, false),
    ElementInfo::new("h2", "h2", Group::Heading, true, false, false),
    ElementInfo::new("h3", "h3", Group::Heading, true, false, false),
    ElementInfo::new("h4", "h4", Group::Heading, true, false, false),
    ElementInfo::new("h5", "h5", Group::Heading, true, false, false),
    ElementInfo::new("h6", "h6", Group::Heading, true, false, false),
    ElementInfo::new("handler", "handler", Group::Other, false, false, false),
    ElementInfo::new("head", "head", Group::Head, true, false, false),
    ElementInfo::new("header", "header", Group::Div, true, false, false),
    ElementInfo::new("hgroup", "hgroup", Group::Div, true, false, false),
    ElementInfo::new("hkern", "hkern", Group::Other, false, false, false),
    ElementInfo::new("hr", "hr", Group::Hr, true, false, false),
    ElementInfo::new("html", "html", Group::Html, false, true, false),
    ElementInfo::new("i", "i", Group::B, false, false, false),
    ElementInfo::new("ident", "ident", Group::Other, false, false, false),
    ElementInfo::new("iframe", "iframe", Group::Iframe, true, false, false),
    ElementInfo::new("image", "image", Group::Image, true, false, false),
    ElementInfo::new("imaginary", "imaginary", Group::Other, false, false, false),
    ElementInfo::new("imaginaryi", "imaginaryi", Group::Other, false, false, false),
    ElementInfo::new("img", "img", Group::Img, true, false, false),
    ElementInfo::new("implies", "implies", Group::Other, false, false, false),
    ElementInfo::new("in", "in", Group::Other, false, false, false),
    ElementInfo::new("infinity", "infinity", Group::Other, false, false, false),
    ElementInfo::new("input", "input", Group::Input, true, false, false),
    ElementInfo::new("ins", "ins", Group::Other, false, false, false),
    ElementInfo::new("int", "int", Group::Other, false, false, false),
    ElementInfo::new("integers", "integers", Group::Other, false, false, false),
    ElementInfo::new("intersect", "intersect", Group::Other, false, false, false),
    ElementInfo::new("interval", "interval", Group::Other, false, false, false),
    ElementInfo::new("inverse", "inverse", Group::Other, false, false, false),
    ElementInfo::new("isindex", "isindex", Group::Isindex, true, false, false),
    ElementInfo::new("kbd", "kbd", Group::Other, false, false, false),
    ElementInfo::new("label", "label", Group::Other, false, false, false),
    ElementInfo::new("lambda", "lambda", Group::Other, false, false, false),
    ElementInfo::new("laplacian", "laplacian", Group::Other, false, false, false),
    ElementInfo::new("lcm", "lcm", Group::Other, false, false, false),
    ElementInfo::new("legend", "legend", Group::Other, false, false, false),
    ElementInfo::new("leq", "leq", Group::Other, false, false, false),
    ElementInfo::new("li", "li", Group::Li, true, false, false),
    ElementInfo::new("limit", "limit", Group::Other, false, false, false),
    ElementInfo::new("line", "line", Group::Other, false, false, false),
    ElementInfo::new("lineargradient", "linearGradient", Group::Other, false, false, false),
    ElementInfo::new("link", "link", Group::Link, true, false, false),
    ElementInfo::new("list", "list", Group::Other, false, false, false),
    ElementInfo::new("listener", "listener", Group::Other, false, false, false),
    ElementInfo::new("listing", "listing", Group::Pre, true, false, false),
    ElementInfo::new("ln", "ln", Group::Other, false, false, false),
    ElementInfo::new("log", "log", Group::Other, false, false, false),
    ElementInfo::new("logbase", "logbase", Group::Other, false, false, false),
    ElementInfo::new("lowlimit", "lowlimit", Group::Other, false, false, false),
    ElementInfo::new("lt", "lt", Group::Other, false, false, false),
    ElementInfo::new("maction", "maction", Group::Other, false, false, false),
    ElementInfo::new("main", "main", Group::Div, true, false, false),
    ElementInfo::new("maligngroup", "maligngroup", Group::Other, false, false, false),
    ElementInfo::new("malignmark", "malignmark", Group::Other, false, false, false),
    ElementInfo::new("map", "map", Group::Other, false, false, false),
    ElementInfo::new("mark", "mark", Group::Other, false, false, false),
    ElementInfo::new("marker", "marker", Group::Other, false, false, false),
    ElementInfo::new("marquee", "marquee", Group::Object, false, true, false),
    ElementInfo::new("mask", "mask", Group::Other, false, false, false),
    ElementInfo::new("math", "math", Group::Math, false, false, false),
    ElementInfo::new("matrix", "matrix", Group::Other, false, false, false),
    ElementInfo::new("matrixrow", "matrixrow", Group::Other, false, false, false),
    ElementInfo::new("max", "max", Group::Other, false, false, false),
    ElementInfo::new("mean", "mean", Group::Other, false, false, false),
    ElementInfo::new("median", "median", Group::Other, false, false, false),
    ElementInfo::new("menclose", "menclose", Group::Other, false, false, false),
    ElementInfo::new("menu", "menu", Group::Div, true, false, false),
    ElementInfo::new("merror", "merror", Group::Other, false, false, false),
    ElementInfo::new("meta", "meta", Group::Meta, true, false, false),
    ElementInfo::new("metadata", "metadata", Group::Other, false, false, false),
    ElementInfo::new("meter", "meter", Group::Other, false, false, false),
    ElementInfo::new("mfenced", "mfenced", Group::Other, false, false, false),
    ElementInfo::new("mfrac", "mfrac", Group::Other, false, false, false),
    ElementInfo::new("mglyph", "mglyph", Group::Other, false, false, false),
    ElementInfo::new("mi", "mi", Group::Other, false, false, false),
    ElementInfo::new("min", "min", Group::Other, false, false, false),
    ElementInfo::new("minus", "minus", Group::Other, false, false, false),
    ElementInfo::new("missing-glyph", "missing-glyph", Group::Other, false, false, false),
    ElementInfo::new("mlabeledtr", "mlabeledtr", Group::Other, false, false, false),
    ElementInfo::new("mmultiscripts", "mmultiscripts", Group::Other, false, false, false),
    ElementInfo::new("mn", "mn", Group::Other, false, false, false),
    ElementInfo::new("mo", "mo", Group::Other, false, false, false),
    ElementInfo::new("mode", "mode", Group::Other, false, false, false),
    ElementInfo::new("moment", "moment", Group::Other, false, false, false),
    ElementInfo::new("momentabout", "momentabout", Group::Other, false, false, false),
    ElementInfo::new("mover", "mover", Group::Other, false, false, false),
    ElementInfo::new("mpadded", "mpadded", Group::Other, false, false, false),
    ElementInfo::new("mpath", "mpath", Group::Other, false, false, false),
    ElementInfo::new("mphantom", "mphantom", Group::Other, false, false, false),
    ElementInfo::new("mprescripts", "mprescripts", Group::Other, false, false, false),
    ElementInfo::new("mroot", "mroot", Group::Other, false, false, false),
    ElementInfo::new("mrow", "mrow", Group::Other, false, false, false),
    ElementInfo::new("ms", "ms", Group::Other, false, false, false),
    ElementInfo::new("mspace", "mspace", Group::Other, false, false, false),
    ElementInfo::new("msqrt", "msqrt", Group::Other, false, false, false),
    ElementInfo::new("mstyle", "mstyle", Group::Other, false, false, false),
    ElementInfo::new("msub", "msub", Group::Other, false, false, false),
    ElementInfo::new("msubsup", "msubsup", Group::Other, false, false, false),
    ElementInfo::new("msup", "msup", Group::Other, false, false, false),
    ElementInfo::new("mtable", "mtable", Group::Other, false, false, false),
    ElementInfo::new("mtd", "mtd", Group::Other, false, false, false),
    ElementInfo::new("mtext", "mtext", Group::Other, false, false, false),
    ElementInfo::new("mtr", "mtr", Group::Other, false, false, false),
    ElementInfo::new("munder", "munder", Group::Other, false, false, false),
    ElementInfo::new("munderover", "munderover", Group::Other, false, false, false),
    ElementInfo::new("naturalnumbers", "naturalnumbers", Group::Other, false, false, false),
    ElementInfo::new("nav", "nav", Group::Div, true, false, false),
    ElementInfo::new("neq", "neq", Group::Other, false, false, false),
    ElementInfo::new("nest", "nest", Group::Other, false, false, false),
    ElementInfo::new("nobr", "nobr", Group::Nobr, false, false, false),
    ElementInfo::new("noembed", "noembed", Group::Iframe, true, false, false),
    ElementInfo::new("noframes", "noframes", Group::Noframes, true, false, false),
    ElementInfo::new("none", "none", Group::Other, false, false, false),
    ElementInfo::new("noscript", "noscript", Group::Noscript, true, false, false),
    ElementInfo::new("not", "not", Group::Other, false, false, false),
    ElementInfo::new("notanumber", "notanumber", Group::Other, false, false, false),
    ElementInfo::new("notin", "notin", Group::Other, false, false, false),
    ElementInfo::new("notprsubset", "notprsubset", Group::Other, false, false, false),
    ElementInfo::new("notsubset", "notsubset", Group::Other, false, false, false),
    ElementInfo::new("object", "object", Group::Object, false, true, false),
    ElementInfo::new("ol", "ol", Group::Ol, true, false, false),
    ElementInfo::new("optgroup", "optgroup", Group::Optgroup, true, false, false),
    ElementInfo::new("option", "option", Group::Option, true, false, false),
    ElementInfo::new("or", "or", Group::Other, false, false, false),
    ElementInfo::new("otherwise", "otherwise", Group::Other, false, false, false),
    ElementInfo::new("outerproduct", "outerproduct", Group::Other, false, false, false),
    ElementInfo::new("output", "output", Group::Other, false, false, false),
    ElementInfo::new("p", "p", Group::P, true, false, false),
    ElementInfo::new("param", "param", Group::Area, true, false, false),
    ElementInfo::new("partialdiff", "partialdiff", Group::Other, false, false, false),
    ElementInfo::new("path", "path", Group::Other, false, false, false),
    ElementInfo::new("pattern", "pattern", Group::Other, false, false, false),
    ElementInfo::new("pi", "pi", Group::Other, false, false, false),
    ElementInfo::new("piece", "piece", Group::Other, false, false, false),
    ElementInfo::new("piecewise", "piecewise", Group::Other, false, false, false),
    ElementInfo::new("plaintext", "plaintext", Group::Plaintext, true, false, false),
    ElementInfo::new("plus", "plus", Group::Other, false, false, false),
    ElementInfo::new("polygon", "polygon", Group::Other, false, false, false),
    ElementInfo::new("polyline", "polyline", Group::Other, false, false, false),
    ElementInfo::new("power", "power", Group::Other, false, false, false),
    ElementInfo::new("pre", "pre", Group::Pre, true, false, false),
    ElementInfo::new("prefetch", "prefetch", Group::Other, false, false, false),
    ElementInfo::new("primes", "primes", Group::Other, false, false, false),
    ElementInfo::new("product", "product", Group::Other, false, false, false),
    ElementInfo::new("progress", "progress", Group::Other, false, false, false),
    ElementInfo::new("prsubset", "prsubset", Group::Other, false, false, false),
    ElementInfo::new("q", "q", Group::Other, false, false, false),
    ElementInfo::new("quotient", "quotient", Group::Other, false, false, false),
    ElementInfo::new("radialgradient", "radialGradient", Group::Other, false, false, false),
    ElementInfo::new("rationals", "rationals", Group::Other, false, false, false),
    ElementInfo::new("real", "real", Group::Other, false, false, false),
    ElementInfo::new("reals", "reals", Group::Other, false, false, false),
    ElementInfo::new("rect", "rect", Group::Other, false, false, false),
    ElementInfo::new("reln", "reln", Group::Other, false, false, false),
    ElementInfo::new("rem", "rem", Group::Other, false, false, false),
    ElementInfo::new("root", "root", Group::Other, false, false, false),
    ElementInfo::new("ruby", "ruby", Group::Ruby, false, false, false),
    ElementInfo::new("rule", "rule", Group::Other, false, false, false),
    ElementInfo::new("s", "s", Group::B, false, false, false),
    ElementInfo::new("samp", "samp", Group::Other, false, false, false),
    ElementInfo::new("scalarproduct", "scalarproduct", Group::Other, false, false, false),
    ElementInfo::new("script", "script", Group::Script, true, false, false),
    ElementInfo::new("sdev", "sdev", Group::Other, false, false, false),
    ElementInfo::new("search", "search", Group::Div, true, false, false),
    ElementInfo::new("sec", "sec", Group::Other, false, false, false),
    ElementInfo::new("sech", "sech", Group::Other, false, false, false),
    ElementInfo::new("section", "section", Group::Div, true, false, false),
    ElementInfo::new("select", "select", Group::Select, true, false, false),
    ElementInfo::new("selector", "selector", Group::Other, false, false, false),
    ElementInfo::new("semantics", "semantics", Group::Other, false, false, false),
    ElementInfo::new("sep", "sep", Group::Other, false, false, false),
    ElementInfo::new("set", "set", Group::Other, false, false, false),
    ElementInfo::new("setdiff", "setdiff", Group::Other, false, false, false),
    ElementInfo::new("sin", "sin", Group::Other, false, false, false),
    ElementInfo::new("sinh", "sinh", Group::Other, false, false, false),
    ElementInfo::new("small", "small", Group::B, false, false, false),
    ElementInfo::new("solidcolor", "solidColor", Group::Other, false, false, false),
    ElementInfo::new("source", "source", Group::Other, false, false, false),
    ElementInfo::new("spacer", "spacer", Group::Area, true, false, false),
    ElementInfo::new("span", "span", Group::Ruby, false, false, false),
    ElementInfo::new("stop", "stop", Group::Other, false, false, false),
    ElementInfo::new("strike", "strike", Group::B, false, false, false),
    ElementInfo::new("strong", "strong", Group::B, false, false, false),
    ElementInfo::new("style", "style", Group::Style, true, false, false),
    ElementInfo::new("sub", "sub", Group::Ruby, false, false, false),
    ElementInfo::new("subset", "subset", Group::Other, false, false, false),
    ElementInfo::new("sum", "sum", Group::Other, false, false, false),
    ElementInfo::new("summary", "summary", Group::Div, true, false, false),
    ElementInfo::new("sup", "sup", Group::Ruby, false, false, false),
    ElementInfo::new("svg", "svg", Group::Svg, false, false, false),
    ElementInfo::new("switch", "switch", Group::Other, false, false, false),
    ElementInfo::new("symbol", "symbol", Group::Other, false, false, false),
    ElementInfo::new("table", "table", Group::Table, false, true, true),
    ElementInfo::new("tan", "tan", Group::Other, false, false, false),
    ElementInfo::new("tanh", "tanh", Group::Other, false, false, false),
    ElementInfo::new("tbody", "tbody", Group::Tbody, true, false, true),
    ElementInfo::new("tbreak", "tbreak", Group::Other, false, false, false),
    ElementInfo::new("td", "td", Group::Td, false, true, false),
    ElementInfo::new("tendsto", "tendsto", Group::Other, false, false, false),
    ElementInfo::new("text", "text", Group::Other, false, false, false),
    ElementInfo::new("textarea", "textarea", Group::Textarea, true, false, false),
    ElementInfo::new("textpath", "textPath", Group::Other, false, false, false),
    ElementInfo::new("tfoot", "tfoot", Group::Tbody, true, false, true),
    ElementInfo::new("th", "th", Group::Td, false, true, false),
    ElementInfo::new("thead", "thead", Group::Tbody, true, false, true),
    ElementInfo::new("time", "time", Group::Other, false, false, false),
    ElementInfo::new("times", "times", Group::Other, false, false, false),
    ElementInfo::new("title", "title", Group::Title, true, false, false),
    ElementInfo::new("tr", "tr", Group::Tr, true, false, true),
    ElementInfo::new("transpose", "transpose", Group::Other, false, false, false),
    ElementInfo::new("tref", "tref", Group::Other, false, false, false),
    ElementInfo::new("true", "true", Group::Other, false, false, false),
    ElementInfo::new("tspan", "tspan", Group::Other, false, false, false),
    ElementInfo::new("tt", "tt", Group::B, false, false, false),
    ElementInfo::new("u", "u", Group::B, false, false, false),
    ElementInfo::new("ul", "ul", Group::Ol, true, false, false),
    ElementInfo::new("union", "union", Group::Other, false, false, false),
    ElementInfo::new("uplimit", "uplimit", Group::Other, false, false, false),
    ElementInfo::new("use", "use", Group::Other, false, false, false),
    ElementInfo::new("var", "var", Group::Ruby, false, false, false),
    ElementInfo::new("variance", "variance", Group::Other, false, false, false),
    ElementInfo::new("vector", "vector", Group::Other, false, false, false),
    ElementInfo::new("vectorproduct", "vectorproduct", Group::Other, false, false, false),
    ElementInfo::new("video", "video", Group::Other, false, false, false),
    ElementInfo::new("view", "view", Group::Other, false, false, false),
    ElementInfo::new("vkern", "vkern", Group::Other, false, false, false),
    ElementInfo::new("wbr", "wbr", Group::Area, true, false, false),
    ElementInfo::new("xmp", "xmp", Group::Xmp, false, false, false),
    ElementInfo::new("xor", "xor", Group::Other, false, false, false),
];

/// `a`
pub const A: ElementName = ElementName::builtin(0, "a");
/// `abbr`
pub const ABBR: ElementName = ElementName::builtin(1, "abbr");
/// `abs`
pub const ABS: ElementName = ElementName::builtin(2, "abs");
/// `acronym`
pub const ACRONYM: ElementName = ElementName::builtin(3, "acronym");
/// `address`
pub const ADDRESS: ElementName = ElementName::builtin(4, "address");
/// `altGlyph`
pub const ALTGLYPH: ElementName = ElementName::builtin(5, "altglyph");
/// `altGlyphDef`
pub const ALTGLYPHDEF: ElementName = ElementName::builtin(6, "altglyphdef");
/// `altGlyphItem`
pub const ALTGLYPHITEM: ElementName = ElementName::builtin(7, "altglyphitem");
/// `and`
pub const AND: ElementName = ElementName::builtin(8, "and");
/// `animate`
pub const ANIMATE: ElementName = ElementName::builtin(9, "animate");
/// `animateColor`
pub const ANIMATECOLOR: ElementName = ElementName::builtin(10, "animatecolor");
/// `animateMotion`
pub const ANIMATEMOTION: ElementName = ElementName::builtin(11, "animatemotion");
/// `animateTransform`
pub const ANIMATETRANSFORM: ElementName = ElementName::builtin(12, "animatetransform");
/// `animation`
pub const ANIMATION: ElementName = ElementName::builtin(13, "animation");
/// `annotation`
pub const ANNOTATION: ElementName = ElementName::builtin(14, "annotation");
/// `annotation-xml`
pub const ANNOTATION_XML: ElementName = ElementName::builtin(15, "annotation-xml");
/// `applet`
pub const APPLET: ElementName = ElementName::builtin(16, "applet");
/// `apply`
pub const APPLY: ElementName = ElementName::builtin(17, "apply");
/// `approx`
pub const APPROX: ElementName = ElementName::builtin(18, "approx");
/// `arccos`
pub const ARCCOS: ElementName = ElementName::builtin(19, "arccos");
/// `arccosh`
pub const ARCCOSH: ElementName = ElementName::builtin(20, "arccosh");
/// `arccot`
pub const ARCCOT: ElementName = ElementName::builtin(21, "arccot");
/// `arccoth`
pub const ARCCOTH: ElementName = ElementName::builtin(22, "arccoth");
/// `arccsc`
pub const ARCCSC: ElementName = ElementName::builtin(23, "arccsc");
/// `arccsch`
pub const ARCCSCH: ElementName = ElementName::builtin(24, "arccsch");
/// `arcsec`
pub const ARCSEC: ElementName = ElementName::builtin(25, "arcsec");
/// `arcsech`
pub const ARCSECH: ElementName = ElementName::builtin(26, "arcsech");
/// `arcsin`
pub const ARCSIN: ElementName = ElementName::builtin(27, "arcsin");
/// `arcsinh`
pub const ARCSINH: ElementName = ElementName::builtin(28, "arcsinh");
/// `arctan`
pub const ARCTAN: ElementName = ElementName::builtin(29, "arctan");
/// `arctanh`
pub const ARCTANH: ElementName = ElementName::builtin(30, "arctanh");
/// `area`
pub const AREA: ElementName = ElementName::builtin(31, "area");
/// `arg`
pub const ARG: ElementName = ElementName::builtin(32, "arg");
/// `article`
pub const ARTICLE: ElementName = ElementName::builtin(33, "article");
/// `aside`
pub const ASIDE: ElementName = ElementName::builtin(34, "aside");
/// `audio`
pub const AUDIO: ElementName = ElementName::builtin(35, "audio");
/// `b`
pub const B: ElementName = ElementName::builtin(36, "b");
/// `base`
pub const BASE: ElementName = ElementName::builtin(37, "base");
/// `basefont`
pub const BASEFONT: ElementName = ElementName::builtin(38, "basefont");
/// `bdo`
pub const BDO: ElementName = ElementName::builtin(39, "bdo");
/// `bgsound`
pub const BGSOUND: ElementName = ElementName::builtin(40, "bgsound");
/// `big`
pub const BIG: ElementName = ElementName::builtin(41, "big");
/// `blockquote`
pub const BLOCKQUOTE: ElementName = ElementName::builtin(42, "blockquote");
/// `body`
pub const BODY: ElementName = ElementName::builtin(43, "body");
/// `br`
pub const BR: ElementName = ElementName::builtin(44, "br");
/// `button`
pub const BUTTON: ElementName = ElementName::builtin(45, "button");
/// `bvar`
pub const BVAR: ElementName = ElementName::builtin(46, "bvar");
/// `canvas`
pub const CANVAS: ElementName = ElementName::builtin(47, "canvas");
/// `caption`
pub const CAPTION: ElementName = ElementName::builtin(48, "caption");
/// `card`
pub const CARD: ElementName = ElementName::builtin(49, "card");
/// `cartesianproduct`
pub const CARTESIANPRODUCT: ElementName = ElementName::builtin(50, "cartesianproduct");
/// `ceiling`
pub const CEILING: ElementName = ElementName::builtin(51, "ceiling");
/// `center`
pub const CENTER: ElementName = ElementName::builtin(52, "center");
/// `ci`
pub const CI: ElementName = ElementName::builtin(53, "ci");
/// `circle`
pub const CIRCLE: ElementName = ElementName::builtin(54, "circle");
/// `cite`
pub const CITE: ElementName = ElementName::builtin(55, "cite");
/// `clipPath`
pub const CLIPPATH: ElementName = ElementName::builtin(56, "clippath");
/// `cn`
pub const CN: ElementName = ElementName::builtin(57, "cn");
/// `code`
pub const CODE: ElementName = ElementName::builtin(58, "code");
/// `codomain`
pub const CODOMAIN: ElementName = ElementName::builtin(59, "codomain");
/// `col`
pub const COL: ElementName = ElementName::builtin(60, "col");
/// `colgroup`
pub const COLGROUP: ElementName = ElementName::builtin(61, "colgroup");
/// `color-profile`
pub const COLOR_PROFILE: ElementName = ElementName::builtin(62, "color-profile");
/// `command`
pub const COMMAND: ElementName = ElementName::builtin(63, "command");
/// `complexes`
pub const COMPLEXES: ElementName = ElementName::builtin(64, "complexes");
/// `compose`
pub const COMPOSE: ElementName = ElementName::builtin(65, "compose");
/// `condition`
pub const CONDITION: ElementName = ElementName::builtin(66, "condition");
/// `conjugate`
pub const CONJUGATE: ElementName = ElementName::builtin(67, "conjugate");
/// `cos`
pub const COS: ElementName = ElementName::builtin(68, "cos");
/// `cosh`
pub const COSH: ElementName = ElementName::builtin(69, "cosh");
/// `cot`
pub const COT: ElementName = ElementName::builtin(70, "cot");
/// `coth`
pub const COTH: ElementName = ElementName::builtin(71, "coth");
/// `csc`
pub const CSC: ElementName = ElementName::builtin(72, "csc");
/// `csch`
pub const CSCH: ElementName = ElementName::builtin(73, "csch");
/// `csymbol`
pub const CSYMBOL: ElementName = ElementName::builtin(74, "csymbol");
/// `curl`
pub const CURL: ElementName = ElementName::builtin(75, "curl");
/// `cursor`
pub const CURSOR: ElementName = ElementName::builtin(76, "cursor");
/// `datagrid`
pub const DATAGRID: ElementName = ElementName::builtin(77, "datagrid");
/// `datatemplate`
pub const DATATEMPLATE: ElementName = ElementName::builtin(78, "datatemplate");
/// `dd`
pub const DD: ElementName = ElementName::builtin(79, "dd");
/// `declare`
pub const DECLARE: ElementName = ElementName::builtin(80, "declare");
/// `definition-src`
pub const DEFINITION_SRC: ElementName = ElementName::builtin(81, "definition-src");
/// `defs`
pub const DEFS: ElementName = ElementName::builtin(82, "defs");
/// `degree`
pub const DEGREE: ElementName = ElementName::builtin(83, "degree");
/// `del`
pub const DEL: ElementName = ElementName::builtin(84, "del");
/// `desc`
pub const DESC: ElementName = ElementName::builtin(85, "desc");
/// `details`
pub const DETAILS: ElementName = ElementName::builtin(86, "details");
/// `determinant`
pub const DETERMINANT: ElementName = ElementName::builtin(87, "determinant");
/// `dfn`
pub const DFN: ElementName = ElementName::builtin(88, "dfn");
/// `dialog`
pub const DIALOG: ElementName = ElementName::builtin(89, "dialog");
/// `diff`
pub const DIFF: ElementName = ElementName::builtin(90, "diff");
/// `dir`
pub const DIR: ElementName = ElementName::builtin(91, "dir");
/// `discard`
pub const DISCARD: ElementName = ElementName::builtin(92, "discard");
/// `div`
pub const DIV: ElementName = ElementName::builtin(93, "div");
/// `divergence`
pub const DIVERGENCE: ElementName = ElementName::builtin(94, "divergence");
/// `divide`
pub const DIVIDE: ElementName = ElementName::builtin(95, "divide");
/// `dl`
pub const DL: ElementName = ElementName::builtin(96, "dl");
/// `domain`
pub const DOMAIN: ElementName = ElementName::builtin(97, "domain");
/// `domainofapplication`
pub const DOMAINOFAPPLICATION: ElementName = ElementName::builtin(98, "domainofapplication");
/// `dt`
pub const DT: ElementName = ElementName::builtin(99, "dt");
/// `ellipse`
pub const ELLIPSE: ElementName = ElementName::builtin(100, "ellipse");
/// `em`
pub const EM: ElementName = ElementName::builtin(101, "em");
/// `embed`
pub const EMBED: ElementName = ElementName::builtin(102, "embed");
/// `emptyset`
pub const EMPTYSET: ElementName = ElementName::builtin(103, "emptyset");
/// `eq`
pub const EQ: ElementName = ElementName::builtin(104, "eq");
/// `equivalent`
pub const EQUIVALENT: ElementName = ElementName::builtin(105, "equivalent");
/// `eulergamma`
pub const EULERGAMMA: ElementName = ElementName::builtin(106, "eulergamma");
/// `event-source`
pub const EVENT_SOURCE: ElementName = ElementName::builtin(107, "event-source");
/// `exists`
pub const EXISTS: ElementName = ElementName::builtin(108, "exists");
/// `exp`
pub const EXP: ElementName = ElementName::builtin(109, "exp");
/// `exponentiale`
pub const EXPONENTIALE: ElementName = ElementName::builtin(110, "exponentiale");
/// `factorial`
pub const FACTORIAL: ElementName = ElementName::builtin(111, "factorial");
/// `factorof`
pub const FACTOROF: ElementName = ElementName::builtin(112, "factorof");
/// `false`
pub const FALSE: ElementName = ElementName::builtin(113, "false");
/// `feBlend`
pub const FEBLEND: ElementName = ElementName::builtin(114, "feblend");
/// `feColorMatrix`
pub const FECOLORMATRIX: ElementName = ElementName::builtin(115, "fecolormatrix");
/// `feComponentTransfer`
pub const FECOMPONENTTRANSFER: ElementName = ElementName::builtin(116, "fecomponenttransfer");
/// `feComposite`
pub const FECOMPOSITE: ElementName = ElementName::builtin(117, "fecomposite");
/// `feConvolveMatrix`
pub const FECONVOLVEMATRIX: ElementName = ElementName::builtin(118, "feconvolvematrix");
/// `feDiffuseLighting`
pub const FEDIFFUSELIGHTING: ElementName = ElementName::builtin(119, "fediffuselighting");
/// `feDisplacementMap`
pub const FEDISPLACEMENTMAP: ElementName = ElementName::builtin(120, "fedisplacementmap");
/// `feDistantLight`
pub const FEDISTANTLIGHT: ElementName = ElementName::builtin(121, "fedistantlight");
/// `feFlood`
pub const FEFLOOD: ElementName = ElementName::builtin(122, "feflood");
/// `feFuncA`
pub const FEFUNCA: ElementName = ElementName::builtin(123, "fefunca");
/// `feFuncB`
pub const FEFUNCB: ElementName = ElementName::builtin(124, "fefuncb");
/// `feFuncG`
pub const FEFUNCG: ElementName = ElementName::builtin(125, "fefuncg");
/// `feFuncR`
pub const FEFUNCR: ElementName = ElementName::builtin(126, "fefuncr");
/// `feGaussianBlur`
pub const FEGAUSSIANBLUR: ElementName = ElementName::builtin(127, "fegaussianblur");
/// `feImage`
pub const FEIMAGE: ElementName = ElementName::builtin(128, "feimage");
/// `feMerge`
pub const FEMERGE: ElementName = ElementName::builtin(129, "femerge");
/// `feMergeNode`
pub const FEMERGENODE: ElementName = ElementName::builtin(130, "femergenode");
/// `feMorphology`
pub const FEMORPHOLOGY: ElementName = ElementName::builtin(131, "femorphology");
/// `feOffset`
pub const FEOFFSET: ElementName = ElementName::builtin(132, "feoffset");
/// `fePointLight`
pub const FEPOINTLIGHT: ElementName = ElementName::builtin(133, "fepointlight");
/// `feSpecularLighting`
pub const FESPECULARLIGHTING: ElementName = ElementName::builtin(134, "fespecularlighting");
/// `feSpotLight`
pub const FESPOTLIGHT: ElementName = ElementName::builtin(135, "fespotlight");
/// `feTile`
pub const FETILE: ElementName = ElementName::builtin(136, "fetile");
/// `feTurbulence`
pub const FETURBULENCE: ElementName = ElementName::builtin(137, "feturbulence");
/// `fieldset`
pub const FIELDSET: ElementName = ElementName::builtin(138, "fieldset");
/// `figcaption`
pub const FIGCAPTION: ElementName = ElementName::builtin(139, "figcaption");
/// `figure`
pub const FIGURE: ElementName = ElementName::builtin(140, "figure");
/// `filter`
pub const FILTER: ElementName = ElementName::builtin(141, "filter");
/// `floor`
pub const FLOOR: ElementName = ElementName::builtin(142, "floor");
/// `fn`
pub const FN: ElementName = ElementName::builtin(143, "fn");
/// `font`
pub const FONT: ElementName = ElementName::builtin(144, "font");
/// `font-face`
pub const FONT_FACE: ElementName = ElementName::builtin(145, "font-face");
/// `font-face-format`
pub const FONT_FACE_FORMAT: ElementName = ElementName::builtin(146, "font-face-format");
/// `font-face-name`
pub const FONT_FACE_NAME: ElementName = ElementName::builtin(147, "font-face-name");
/// `font-face-src`
pub const FONT_FACE_SRC: ElementName = ElementName::builtin(148, "font-face-src");
/// `font-face-uri`
pub const FONT_FACE_URI: ElementName = ElementName::builtin(149, "font-face-uri");
/// `footer`
pub const FOOTER: ElementName = ElementName::builtin(150, "footer");
/// `forall`
pub const FORALL: ElementName = ElementName::builtin(151, "forall");
/// `foreignObject`
pub const FOREIGNOBJECT: ElementName = ElementName::builtin(152, "foreignobject");
/// `form`
pub const FORM: ElementName = ElementName::builtin(153, "form");
/// `frame`
pub const FRAME: ElementName = ElementName::builtin(154, "frame");
/// `frameset`
pub const FRAMESET: ElementName = ElementName::builtin(155, "frameset");
/// `g`
pub const G: ElementName = ElementName::builtin(156, "g");
/// `gcd`
pub const GCD: ElementName = ElementName::builtin(157, "gcd");
/// `geq`
pub const GEQ: ElementName = ElementName::builtin(158, "geq");
/// `glyph`
pub const GLYPH: ElementName = ElementName::builtin(159, "glyph");
/// `glyphRef`
pub const GLYPHREF: ElementName = ElementName::builtin(160, "glyphref");
/// `grad`
pub const GRAD: ElementName = ElementName::builtin(161, "grad");
/// `gt`
pub const GT: ElementName = ElementName::builtin(162, "gt");
/// `h1`
pub const H1: ElementName = ElementName::builtin(163, "h1");
/// `h2`
pub const H2: ElementName = ElementName::builtin(164, "h2");
/// `h3`
pub const H3: ElementName = ElementName::builtin(165, "h3");
/// `h4`
pub const H4: ElementName = ElementName::builtin(166, "h4");
/// `h5`
pub const H5: ElementName = ElementName::builtin(167, "h5");
/// `h6`
pub const H6: ElementName = ElementName::builtin(168, "h6");
/// `handler`
pub const HANDLER: ElementName = ElementName::builtin(169, "handler");
/// `head`
pub const HEAD: ElementName = ElementName::builtin(170, "head");
/// `header`
pub const HEADER: ElementName = ElementName::builtin(171, "header");
/// `hgroup`
pub const HGROUP: ElementName = ElementName::builtin(172, "hgroup");
/// `hkern`
pub const HKERN: ElementName = ElementName::builtin(173, "hkern");
/// `hr`
pub const HR: ElementName = ElementName::builtin(174, "hr");
/// `html`
pub const HTML: ElementName = ElementName::builtin(175, "html");
/// `i`
pub const I: ElementName = ElementName::builtin(176, "i");
/// `ident`
pub const IDENT: ElementName = ElementName::builtin(177, "ident");
/// `iframe`
pub const IFRAME: ElementName = ElementName::builtin(178, "iframe");
/// `image`
pub const IMAGE: ElementName = ElementName::builtin(179, "image");
/// `imaginary`
pub const IMAGINARY: ElementName = ElementName::builtin(180, "imaginary");
/// `imaginaryi`
pub const IMAGINARYI: ElementName = ElementName::builtin(181, "imaginaryi");
/// `img`
pub const IMG: ElementName = ElementName::builtin(182, "img");
/// `implies`
pub const IMPLIES: ElementName = ElementName::builtin(183, "implies");
/// `in`
pub const IN: ElementName = ElementName::builtin(184, "in");
/// `infinity`
pub const INFINITY: ElementName = ElementName::builtin(185, "infinity");
/// `input`
pub const INPUT: ElementName = ElementName::builtin(186, "input");
/// `ins`
pub const INS: ElementName = ElementName::builtin(187, "ins");
/// `int`
pub const INT: ElementName = ElementName::builtin(188, "int");
/// `integers`
pub const INTEGERS: ElementName = ElementName::builtin(189, "integers");
/// `intersect`
pub const INTERSECT: ElementName = ElementName::builtin(190, "intersect");
/// `interval`
pub const INTERVAL: ElementName = ElementName::builtin(191, "interval");
/// `inverse`
pub const INVERSE: ElementName = ElementName::builtin(192, "inverse");
/// `isindex`
pub const ISINDEX: ElementName = ElementName::builtin(193, "isindex");
/// `kbd`
pub const KBD: ElementName = ElementName::builtin(194, "kbd");
/// `label`
pub const LABEL: ElementName = ElementName::builtin(195, "label");
/// `lambda`
pub const LAMBDA: ElementName = ElementName::builtin(196, "lambda");
/// `laplacian`
pub const LAPLACIAN: ElementName = ElementName::builtin(197, "laplacian");
/// `lcm`
pub const LCM: ElementName = ElementName::builtin(198, "lcm");
/// `legend`
pub const LEGEND: ElementName = ElementName::builtin(199, "legend");
/// `leq`
pub const LEQ: ElementName = ElementName::builtin(200, "leq");
/// `li`
pub const LI: ElementName = ElementName::builtin(201, "li");
/// `limit`
pub const LIMIT: ElementName = ElementName::builtin(202, "limit");
/// `line`
pub const LINE: ElementName = ElementName::builtin(203, "line");
/// `linearGradient`
pub const LINEARGRADIENT: ElementName = ElementName::builtin(204, "lineargradient");
/// `link`
pub const LINK: ElementName = ElementName::builtin(205, "link");
/// `list`
pub const LIST: ElementName = ElementName::builtin(206, "list");
/// `listener`
pub const LISTENER: ElementName = ElementName::builtin(207, "listener");
/// `listing`
pub const LISTING: ElementName = ElementName::builtin(208, "listing");
/// `ln`
pub const LN: ElementName = ElementName::builtin(209, "ln");
/// `log`
pub const LOG: ElementName = ElementName::builtin(210, "log");
/// `logbase`
pub const LOGBASE: ElementName = ElementName::builtin(211, "logbase");
/// `lowlimit`
pub const LOWLIMIT: ElementName = ElementName::builtin(212, "lowlimit");
/// `lt`
pub const LT: ElementName = ElementName::builtin(213, "lt");
/// `maction`
pub const MACTION: ElementName = ElementName::builtin(214, "maction");
/// `main`
pub const MAIN: ElementName = ElementName::builtin(215, "main");
/// `maligngroup`
pub const MALIGNGROUP: ElementName = ElementName::builtin(216, "maligngroup");
/// `malignmark`
pub const MALIGNMARK: ElementName = ElementName::builtin(217, "malignmark");
/// `map`
pub const MAP: ElementName = ElementName::builtin(218, "map");
/// `mark`
pub const MARK: ElementName = ElementName::builtin(219, "mark");
/// `marker`
pub const MARKER: ElementName = ElementName::builtin(220, "marker");
/// `marquee`
pub const MARQUEE: ElementName = ElementName::builtin(221, "marquee");
/// `mask`
pub const MASK: ElementName = ElementName::builtin(222, "mask");
/// `math`
pub const MATH: ElementName = ElementName::builtin(223, "math");
/// `matrix`
pub const MATRIX: ElementName = ElementName::builtin(224, "matrix");
/// `matrixrow`
pub const MATRIXROW: ElementName = ElementName::builtin(225, "matrixrow");
/// `max`
pub const MAX: ElementName = ElementName::builtin(226, "max");
/// `mean`
pub const MEAN: ElementName = ElementName::builtin(227, "mean");
/// `median`
pub const MEDIAN: ElementName = ElementName::builtin(228, "median");
/// `menclose`
pub const MENCLOSE: ElementName = ElementName::builtin(229, "menclose");
/// `menu`
pub const MENU: ElementName = ElementName::builtin(230, "menu");
/// `merror`
pub const MERROR: ElementName = ElementName::builtin(231, "merror");
/// `meta`
pub const META: ElementName = ElementName::builtin(232, "meta");
/// `metadata`
pub const METADATA: ElementName = ElementName::builtin(233, "metadata");
/// `meter`
pub const METER: ElementName = ElementName::builtin(234, "meter");
/// `mfenced`
pub const MFENCED: ElementName = ElementName::builtin(235, "mfenced");
/// `mfrac`
pub const MFRAC: ElementName = ElementName::builtin(236, "mfrac");
/// `mglyph`
pub const MGLYPH: ElementName = ElementName::builtin(237, "mglyph");
/// `mi`
pub const MI: ElementName = ElementName::builtin(238, "mi");
/// `min`
pub const MIN: ElementName = ElementName::builtin(239, "min");
/// `minus`
pub const MINUS: ElementName = ElementName::builtin(240, "minus");
/// `missing-glyph`
pub const MISSING_GLYPH: ElementName = ElementName::builtin(241, "missing-glyph");
/// `mlabeledtr`
pub const MLABELEDTR: ElementName = ElementName::builtin(242, "mlabeledtr");
/// `mmultiscripts`
pub const MMULTISCRIPTS: ElementName = ElementName::builtin(243, "mmultiscripts");
/// `mn`
pub const MN: ElementName = ElementName::builtin(244, "mn");
/// `mo`
pub const MO: ElementName = ElementName::builtin(245, "mo");
/// `mode`
pub const MODE: ElementName = ElementName::builtin(246, "mode");
/// `moment`
pub const MOMENT: ElementName = ElementName::builtin(247, "moment");
/// `momentabout`
pub const MOMENTABOUT: ElementName = ElementName::builtin(248, "momentabout");
/// `mover`
pub const MOVER: ElementName = ElementName::builtin(249, "mover");
/// `mpadded`
pub const MPADDED: ElementName = ElementName::builtin(250, "mpadded");
/// `mpath`
pub const MPATH: ElementName = ElementName::builtin(251, "mpath");
/// `mphantom`
pub const MPHANTOM: ElementName = ElementName::builtin(252, "mphantom");
/// `mprescripts`
pub const MPRESCRIPTS: ElementName = ElementName::builtin(253, "mprescripts");
/// `mroot`
pub const MROOT: ElementName = ElementName::builtin(254, "mroot");
/// `mrow`
pub const MROW: ElementName = ElementName::builtin(255, "mrow");
/// `ms`
pub const MS: ElementName = ElementName::builtin(256, "ms");
/// `mspace`
pub const MSPACE: ElementName = ElementName::builtin(257, "mspace");
/// `msqrt`
pub const MSQRT: ElementName = ElementName::builtin(258, "msqrt");
/// `mstyle`
pub const MSTYLE: ElementName = ElementName::builtin(259, "mstyle");
/// `msub`
pub const MSUB: ElementName = ElementName::builtin(260, "msub");
/// `msubsup`
pub const MSUBSUP: ElementName = ElementName::builtin(261, "msubsup");
/// `msup`
pub const MSUP: ElementName = ElementName::builtin(262, "msup");
/// `mtable`
pub const MTABLE: ElementName = ElementName::builtin(263, "mtable");
/// `mtd`
pub const MTD: ElementName = ElementName::builtin(264, "mtd");
/// `mtext`
pub const MTEXT: ElementName = ElementName::builtin(265, "mtext");
/// `mtr`
pub const MTR: ElementName = ElementName::builtin(266, "mtr");
/// `munder`
pub const MUNDER: ElementName = ElementName::builtin(267, "munder");
/// `munderover`
pub const MUNDEROVER: ElementName = ElementName::builtin(268, "munderover");
/// `naturalnumbers`
pub const NATURALNUMBERS: ElementName = ElementName::builtin(269, "naturalnumbers");
/// `nav`
pub const NAV: ElementName = ElementName::builtin(270, "nav");
/// `neq`
pub const NEQ: ElementName = ElementName::builtin(271, "neq");
/// `nest`
pub const NEST: ElementName = ElementName::builtin(272, "nest");
/// `nobr`
pub const NOBR: ElementName = ElementName::builtin(273, "nobr");
/// `noembed`
pub const NOEMBED: ElementName = ElementName::builtin(274, "noembed");
/// `noframes`
pub const NOFRAMES: ElementName = ElementName::builtin(275, "noframes");
/// `none`
pub const NONE: ElementName = ElementName::builtin(276, "none");
/// `noscript`
pub const NOSCRIPT: ElementName = ElementName::builtin(277, "noscript");
/// `not`
pub const NOT: ElementName = ElementName::builtin(278, "not");
/// `notanumber`
pub const NOTANUMBER: ElementName = ElementName::builtin(279, "notanumber");
/// `notin`
pub const NOTIN: ElementName = ElementName::builtin(280, "notin");
/// `notprsubset`
pub const NOTPRSUBSET: ElementName = ElementName::builtin(281, "notprsubset");
/// `notsubset`
pub const NOTSUBSET: ElementName = ElementName::builtin(282, "notsubset");
/// `object`
pub const OBJECT: ElementName = ElementName::builtin(283, "object");
/// `ol`
pub const OL: ElementName = ElementName::builtin(284, "ol");
/// `optgroup`
pub const OPTGROUP: ElementName = ElementName::builtin(285, "optgroup");
/// `option`
pub const OPTION: ElementName = ElementName::builtin(286, "option");
/// `or`
pub const OR: ElementName = ElementName::builtin(287, "or");
/// `otherwise`
pub const OTHERWISE: ElementName = ElementName::builtin(288, "otherwise");
/// `outerproduct`
pub const OUTERPRODUCT: ElementName = ElementName::builtin(289, "outerproduct");
/// `output`
pub const OUTPUT: ElementName = ElementName::builtin(290, "output");
/// `p`
pub const P: ElementName = ElementName::builtin(291, "p");
/// `param`
pub const PARAM: ElementName = ElementName::builtin(292, "param");
/// `partialdiff`
pub const PARTIALDIFF: ElementName = ElementName::builtin(293, "partialdiff");
/// `path`
pub const PATH: ElementName = ElementName::builtin(294, "path");
/// `pattern`
pub const PATTERN: ElementName = ElementName::builtin(295, "pattern");
/// `pi`
pub const PI: ElementName = ElementName::builtin(296, "pi");
/// `piece`
pub const PIECE: ElementName = ElementName::builtin(297, "piece");
/// `piecewise`
pub const PIECEWISE: ElementName = ElementName::builtin(298, "piecewise");
/// `plaintext`
pub const PLAINTEXT: ElementName = ElementName::builtin(299, "plaintext");
/// `plus`
pub const PLUS: ElementName = ElementName::builtin(300, "plus");
/// `polygon`
pub const POLYGON: ElementName = ElementName::builtin(301, "polygon");
/// `polyline`
pub const POLYLINE: ElementName = ElementName::builtin(302, "polyline");
/// `power`
pub const POWER: ElementName = ElementName::builtin(303, "power");
/// `pre`
pub const PRE: ElementName = ElementName::builtin(304, "pre");
/// `prefetch`
pub const PREFETCH: ElementName = ElementName::builtin(305, "prefetch");
/// `primes`
pub const PRIMES: ElementName = ElementName::builtin(306, "primes");
/// `product`
pub const PRODUCT: ElementName = ElementName::builtin(307, "product");
/// `progress`
pub const PROGRESS: ElementName = ElementName::builtin(308, "progress");
/// `prsubset`
pub const PRSUBSET: ElementName = ElementName::builtin(309, "prsubset");
/// `q`
pub const Q: ElementName = ElementName::builtin(310, "q");
/// `quotient`
pub const QUOTIENT: ElementName = ElementName::builtin(311, "quotient");
/// `radialGradient`
pub const RADIALGRADIENT: ElementName = ElementName::builtin(312, "radialgradient");
/// `rationals`
pub const RATIONALS: ElementName = ElementName::builtin(313, "rationals");
/// `real`
pub const REAL: ElementName = ElementName::builtin(314, "real");
/// `reals`
pub const REALS: ElementName = ElementName::builtin(315, "reals");
/// `rect`
pub const RECT: ElementName = ElementName::builtin(316, "rect");
/// `reln`
pub const RELN: ElementName = ElementName::builtin(317, "reln");
/// `rem`
pub const REM: ElementName = ElementName::builtin(318, "rem");
/// `root`
pub const ROOT: ElementName = ElementName::builtin(319, "root");
/// `ruby`
pub const RUBY: ElementName = ElementName::builtin(320, "ruby");
/// `rule`
pub const RULE: ElementName = ElementName::builtin(321, "rule");
/// `s`
pub const S: ElementName = ElementName::builtin(322, "s");
/// `samp`
pub const SAMP: ElementName = ElementName::builtin(323, "samp");
/// `scalarproduct`
pub const SCALARPRODUCT: ElementName = ElementName::builtin(324, "scalarproduct");
/// `script`
pub const SCRIPT: ElementName = ElementName::builtin(325, "script");
/// `sdev`
pub const SDEV: ElementName = ElementName::builtin(326, "sdev");
/// `search`
pub const SEARCH: ElementName = ElementName::builtin(327, "search");
/// `sec`
pub const SEC: ElementName = ElementName::builtin(328, "sec");
/// `sech`
pub const SECH: ElementName = ElementName::builtin(329, "sech");
/// `section`
pub const SECTION: ElementName = ElementName::builtin(330, "section");
/// `select`
pub const SELECT: ElementName = ElementName::builtin(331, "select");
/// `selector`
pub const SELECTOR: ElementName = ElementName::builtin(332, "selector");
/// `semantics`
pub const SEMANTICS: ElementName = ElementName::builtin(333, "semantics");
/// `sep`
pub const SEP: ElementName = ElementName::builtin(334, "sep");
/// `set`
pub const SET: ElementName = ElementName::builtin(335, "set");
/// `setdiff`
pub const SETDIFF: ElementName = ElementName::builtin(336, "setdiff");
/// `sin`
pub const SIN: ElementName = ElementName::builtin(337, "sin");
/// `sinh`
pub const SINH: ElementName = ElementName::builtin(338, "sinh");
/// `small`
pub const SMALL: ElementName = ElementName::builtin(339, "small");
/// `solidColor`
pub const SOLIDCOLOR: ElementName = ElementName::builtin(340, "solidcolor");
/// `source`
pub const SOURCE: ElementName = ElementName::builtin(341, "source");
/// `spacer`
pub const SPACER: ElementName = ElementName::builtin(342, "spacer");
/// `span`
pub const SPAN: ElementName = ElementName::builtin(343, "span");
/// `stop`
pub const STOP: ElementName = ElementName::builtin(344, "stop");
/// `strike`
pub const STRIKE: ElementName = ElementName::builtin(345, "strike");
/// `strong`
pub const STRONG: ElementName = ElementName::builtin(346, "strong");
/// `style`
pub const STYLE: ElementName = ElementName::builtin(347, "style");
/// `sub`
pub const SUB: ElementName = ElementName::builtin(348, "sub");
/// `subset`
pub const SUBSET: ElementName = ElementName::builtin(349, "subset");
/// `sum`
pub const SUM: ElementName = ElementName::builtin(350, "sum");
/// `summary`
pub const SUMMARY: ElementName = ElementName::builtin(351, "summary");
/// `sup`
pub const SUP: ElementName = ElementName::builtin(352, "sup");
/// `svg`
pub const SVG: ElementName = ElementName::builtin(353, "svg");
/// `switch`
pub const SWITCH: ElementName = ElementName::builtin(354, "switch");
/// `symbol`
pub const SYMBOL: ElementName = ElementName::builtin(355, "symbol");
/// `table`
pub const TABLE: ElementName = ElementName::builtin(356, "table");
/// `tan`
pub const TAN: ElementName = ElementName::builtin(357, "tan");
/// `tanh`
pub const TANH: ElementName = ElementName::builtin(358, "tanh");
/// `tbody`
pub const TBODY: ElementName = ElementName::builtin(359, "tbody");
/// `tbreak`
pub const TBREAK: ElementName = ElementName::builtin(360, "tbreak");
/// `td`
pub const TD: ElementName = ElementName::builtin(361, "td");
/// `tendsto`
pub const TENDSTO: ElementName = ElementName::builtin(362, "tendsto");
/// `text`
pub const TEXT: ElementName = ElementName::builtin(363, "text");
/// `textarea`
pub const TEXTAREA: ElementName = ElementName::builtin(364, "textarea");
/// `textPath`
pub const TEXTPATH: ElementName = ElementName::builtin(365, "textpath");
/// `tfoot`
pub const TFOOT: ElementName = ElementName::builtin(366, "tfoot");
/// `th`
pub const TH: ElementName = ElementName::builtin(367, "th");
/// `thead`
pub const THEAD: ElementName = ElementName::builtin(368, "thead");
/// `time`
pub const TIME: ElementName = ElementName::builtin(369, "time");
/// `times`
pub const TIMES: ElementName = ElementName::builtin(370, "times");
/// `title`
pub const TITLE: ElementName = ElementName::builtin(371, "title");
/// `tr`
pub const TR: ElementName = ElementName::builtin(372, "tr");
/// `transpose`
pub const TRANSPOSE: ElementName = ElementName::builtin(373, "transpose");
/// `tref`
pub const TREF: ElementName = ElementName::builtin(374, "tref");
/// `true`
pub const TRUE: ElementName = ElementName::builtin(375, "true");
/// `tspan`
pub const TSPAN: ElementName = ElementName::builtin(376, "tspan");
/// `tt`
pub const TT: ElementName = ElementName::builtin(377, "tt");
/// `u`
pub const U: ElementName = ElementName::builtin(378, "u");
/// `ul`
pub const UL: ElementName = ElementName::builtin(379, "ul");
/// `union`
pub const UNION: ElementName = ElementName::builtin(380, "union");
/// `uplimit`
pub const UPLIMIT: ElementName = ElementName::builtin(381, "uplimit");
/// `use`
pub const USE: ElementName = ElementName::builtin(382, "use");
/// `var`
pub const VAR: ElementName = ElementName::builtin(383, "var");
/// `variance`
pub const VARIANCE: ElementName = ElementName::builtin(384, "variance");
/// `vector`
pub const VECTOR: ElementName = ElementName::builtin(385, "vector");
/// `vectorproduct`
pub const VECTORPRODUCT: ElementName = ElementName::builtin(386, "vectorproduct");
/// `video`
pub const VIDEO: ElementName = ElementName::builtin(387, "video");
/// `view`
pub const VIEW: ElementName = ElementName::builtin(388, "view");
/// `vkern`
pub const VKERN: ElementName = ElementName::builtin(389, "vkern");
/// `wbr`
pub const WBR: ElementName = ElementName::builtin(390, "wbr");
/// `xmp`
pub const XMP: ElementName = ElementName::builtin(391, "xmp");
/// `xor`
pub const XOR: ElementName = ElementName::builtin(392, "xor");
