//! Reserved words of the SysML v2 and KerML textual notations.
//!
//! A name that spells one of these must be written as an unrestricted
//! (quoted) name.

/// Reserved words, sorted for binary search.
pub const RESERVED_WORDS: &[&str] = &[
    "about",
    "abstract",
    "accept",
    "action",
    "actor",
    "after",
    "alias",
    "all",
    "allocate",
    "allocation",
    "analysis",
    "and",
    "as",
    "assert",
    "assign",
    "assoc",
    "assume",
    "at",
    "attribute",
    "behavior",
    "bind",
    "binding",
    "by",
    "calc",
    "case",
    "chains",
    "class",
    "classifier",
    "comment",
    "composite",
    "concern",
    "conjugate",
    "conjugates",
    "conjugation",
    "connect",
    "connection",
    "connector",
    "const",
    "constant",
    "constraint",
    "crosses",
    "datatype",
    "decide",
    "def",
    "default",
    "defined",
    "dependency",
    "derived",
    "differs",
    "disjoining",
    "disjoint",
    "do",
    "doc",
    "done",
    "else",
    "end",
    "entry",
    "enum",
    "enumeration",
    "event",
    "exhibit",
    "exit",
    "expose",
    "expr",
    "false",
    "feature",
    "featured",
    "featuring",
    "filter",
    "first",
    "flow",
    "for",
    "fork",
    "frame",
    "from",
    "function",
    "hastype",
    "if",
    "implies",
    "import",
    "in",
    "include",
    "individual",
    "inout",
    "interaction",
    "interface",
    "intersects",
    "inv",
    "inverse",
    "inverting",
    "istype",
    "item",
    "join",
    "language",
    "library",
    "locale",
    "loop",
    "member",
    "merge",
    "message",
    "meta",
    "metaclass",
    "metadata",
    "multiplicity",
    "namespace",
    "new",
    "nonunique",
    "not",
    "null",
    "objective",
    "occurrence",
    "of",
    "or",
    "ordered",
    "out",
    "package",
    "parallel",
    "part",
    "perform",
    "port",
    "portion",
    "predicate",
    "private",
    "protected",
    "public",
    "readonly",
    "redefines",
    "redefinition",
    "ref",
    "references",
    "render",
    "rendering",
    "rep",
    "require",
    "requirement",
    "return",
    "satisfy",
    "send",
    "snapshot",
    "specialization",
    "specializes",
    "stakeholder",
    "standard",
    "start",
    "state",
    "step",
    "struct",
    "subclassifier",
    "subject",
    "subset",
    "subsets",
    "subtype",
    "succession",
    "terminate",
    "then",
    "this",
    "timeslice",
    "to",
    "transition",
    "true",
    "type",
    "typed",
    "typing",
    "unions",
    "until",
    "use",
    "var",
    "variant",
    "variation",
    "verification",
    "verify",
    "via",
    "view",
    "viewpoint",
    "when",
    "while",
    "xor",
];

/// Returns true if `word` is a reserved word.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.binary_search(&word).is_ok()
}
