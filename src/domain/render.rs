//! Template rendering: substitute a normalized value into a display template.

use super::PLACEHOLDER;
use crate::catalog::FormatDescriptor;

/// Expands `descriptor`'s template with the characters of `value`.
///
/// The template is walked left to right. Every `#` marker and every
/// literal digit is a substitution point consuming the next character of
/// `value`; all other characters copy through unchanged as separators.
/// Treating template digits as substitution points lets catalog authors
/// write either abstract markers (`####-####`) or example digits
/// (`0800 ### ###`) with identical rendering.
///
/// Callers are expected to pass a value whose length the matcher has
/// already checked; a substitution point with no character left renders
/// as the `#` marker.
pub fn render(descriptor: &FormatDescriptor, value: &str) -> String {
    let mut source = value.chars();
    let mut rendered = String::with_capacity(descriptor.template().len());

    for ch in descriptor.template().chars() {
        if ch == PLACEHOLDER || ch.is_ascii_digit() {
            rendered.push(source.next().unwrap_or(PLACEHOLDER));
        } else {
            rendered.push(ch);
        }
    }

    rendered
}
