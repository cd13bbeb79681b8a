/// Opaque identifier of one live native scanning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureHandle(pub u64);

/// Opaque reference to the rendered native view, as handed over by the host
/// when the view becomes available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewRef {
    pub tag: u64,
}

impl ViewRef {
    pub fn new(tag: u64) -> Self {
        Self { tag }
    }
}
