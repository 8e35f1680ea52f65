use crate::error::Result;

/// Validate structural integrity of a geometric value.
pub trait Validate {
    fn validate(&self) -> Result<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
