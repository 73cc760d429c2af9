/// One emitted source file: created once by the renderer, never mutated,
/// collected in the same order as the class models that produced it.
#[derive(Clone, Debug)]
pub struct GeneratedSource {
    /// Derived class name, kind suffix included.
    pub java_name: String,
    /// Full package, e.g. `com.example.entity`.
    pub package_name: String,
    pub source_code: String,
}
