/// Ruby annotation `[base|reading]`.
pub struct Annotation;

impl Annotation {
    pub const OPEN: u8 = b'[';
    pub const SEPARATOR: u8 = b'|';
    pub const CLOSE: u8 = b']';
}
