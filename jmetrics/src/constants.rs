use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the configuration file searched for in the project root.
pub const CONFIG_FILENAME: &str = "jmetrics.toml";

/// Hard ceiling on the result cache capacity. Requested capacities above
/// this are clamped; the cache never holds more entries than this.
pub const MAX_CACHE_CAPACITY: usize = 10_000;

/// Upper bound on inheritance-tree walks. Bounds DIT on malformed or
/// cyclic `extends` chains.
pub const MAX_INHERITANCE_DEPTH: usize = 20;

/// File count above which the orchestrator switches to the worker pool
/// when parallel mode is enabled.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Default bounded depth of the worker pool's task queue. Submissions past
/// a full queue run inline on the submitting thread.
pub const DEFAULT_QUEUE_DEPTH: usize = 256;

/// Set of folders to exclude by default.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert(".git");
        s.insert(".gradle");
        s.insert(".idea");
        s.insert(".mvn");
        s.insert("target");
        s.insert("build");
        s.insert("out");
        s.insert("bin");
        s.insert("dist");
        s.insert("node_modules");
        s.insert("generated");
        s.insert("generated-sources");
        s
    })
}

/// Calls that start a stream pipeline. A stream *started* inside a loop
/// body escalates that loop to at least O(n²).
pub fn get_stream_start_ops() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("stream");
        s.insert("parallelStream");
        s.insert("iterate");
        s.insert("generate");
        s.insert("chars");
        s.insert("lines");
        s.insert("range");
        s.insert("rangeClosed");
        s
    })
}

/// Stream/collection operations treated as one linear pass.
pub fn get_linear_ops() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("filter");
        s.insert("map");
        s.insert("mapToInt");
        s.insert("mapToLong");
        s.insert("mapToObj");
        s.insert("forEach");
        s.insert("forEachOrdered");
        s.insert("reduce");
        s.insert("collect");
        s.insert("distinct");
        s.insert("peek");
        s.insert("anyMatch");
        s.insert("allMatch");
        s.insert("noneMatch");
        s.insert("count");
        s.insert("min");
        s.insert("max");
        s.insert("sum");
        s.insert("indexOf");
        s.insert("contains");
        s.insert("containsKey");
        s.insert("containsValue");
        s.insert("removeIf");
        s
    })
}

/// Operations classified as O(n log n) on their own (comparison sorts).
pub fn get_sort_ops() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("sort");
        s.insert("sorted");
        s
    })
}

/// Operations classified as O(log n): balanced-tree lookups and binary
/// searches. A call to one of these inside a loop lifts the method to
/// O(n log n).
pub fn get_log_ops() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("binarySearch");
        s.insert("floorKey");
        s.insert("ceilingKey");
        s.insert("floorEntry");
        s.insert("ceilingEntry");
        s.insert("higherKey");
        s.insert("lowerKey");
        s.insert("headMap");
        s.insert("tailMap");
        s
    })
}

/// String operations flagged when they occur inside a loop (each hides a
/// linear scan or copy).
pub fn get_string_ops() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("concat");
        s.insert("substring");
        s.insert("replace");
        s.insert("replaceAll");
        s.insert("split");
        s.insert("join");
        s.insert("format");
        s.insert("matches");
        s
    })
}

/// Boxed primitives and ubiquitous platform types excluded from coupling
/// counts: depending on these is not coupling worth reporting.
pub fn get_common_types() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("byte");
        s.insert("short");
        s.insert("int");
        s.insert("long");
        s.insert("float");
        s.insert("double");
        s.insert("boolean");
        s.insert("char");
        s.insert("void");
        s.insert("var");
        s.insert("Byte");
        s.insert("Short");
        s.insert("Integer");
        s.insert("Long");
        s.insert("Float");
        s.insert("Double");
        s.insert("Boolean");
        s.insert("Character");
        s.insert("String");
        s.insert("CharSequence");
        s.insert("StringBuilder");
        s.insert("Object");
        s.insert("Number");
        s.insert("Math");
        s.insert("System");
        s.insert("List");
        s.insert("ArrayList");
        s.insert("LinkedList");
        s.insert("Map");
        s.insert("HashMap");
        s.insert("Set");
        s.insert("HashSet");
        s.insert("Collection");
        s.insert("Collections");
        s.insert("Arrays");
        s.insert("Optional");
        s.insert("Iterator");
        s.insert("Iterable");
        s.insert("Exception");
        s.insert("RuntimeException");
        s.insert("Throwable");
        s
    })
}

// Legacy-style aliases matching call sites that read like constants
pub use get_common_types as COMMON_TYPES;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_linear_ops as LINEAR_OPS;
pub use get_log_ops as LOG_OPS;
pub use get_sort_ops as SORT_OPS;
pub use get_stream_start_ops as STREAM_START_OPS;
pub use get_string_ops as STRING_OPS;
