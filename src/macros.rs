//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning a range of the source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched text
/// * `$start` / `$end` - Byte offsets of the lexeme in the source
/// * `$file` - The `Rc<String>` file name
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 0, 2, file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $start:expr, $end:expr, $file:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: Span {
                start: Position($start as u32, Rc::clone(&$file)),
                end: Position($end as u32, Rc::clone(&$file)),
            },
        }
    };
}
