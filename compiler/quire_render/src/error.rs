//! Lowering errors.

/// A layout that cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// A text token contains `\n` or `\r`. Text is measured as one atomic
    /// token on one line, so embedded line terminators would corrupt every
    /// width decision after them.
    #[error("text {text:?} contains a line terminator at byte {offset}")]
    LineTerminator { text: String, offset: usize },
}

impl LowerError {
    /// Check `data` for line terminators.
    pub(crate) fn check_text(data: &str) -> Result<(), LowerError> {
        match data.find(['\n', '\r']) {
            Some(offset) => Err(LowerError::LineTerminator {
                text: data.to_owned(),
                offset,
            }),
            None => Ok(()),
        }
    }
}
