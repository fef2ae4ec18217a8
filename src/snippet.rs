// SPDX-License-Identifier: MPL-2.0
//! Usage snippet generation.
//!
//! Renders the Rust code a caller would write to show a toast with a given
//! set of options. The playground prints it next to the live preview so the
//! chosen options can be copied into an application.

use crate::notifications::{Position, ToastOptions, Variant};
use std::fmt::Write;
use std::time::Duration;

const INDENT: &str = "    ";

fn variant_path(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "Variant::Default",
        Variant::Success => "Variant::Success",
        Variant::Warning => "Variant::Warning",
        Variant::Danger => "Variant::Danger",
        Variant::Info => "Variant::Info",
    }
}

fn position_path(position: Position) -> &'static str {
    match position {
        Position::TopLeft => "Position::TopLeft",
        Position::TopCenter => "Position::TopCenter",
        Position::TopRight => "Position::TopRight",
        Position::BottomLeft => "Position::BottomLeft",
        Position::BottomCenter => "Position::BottomCenter",
        Position::BottomRight => "Position::BottomRight",
    }
}

fn millis(duration: Duration) -> String {
    format!("Duration::from_millis({})", duration.as_millis())
}

/// Renders a `manager.show(..)` call for `message` and `options`.
///
/// Unset options are left out so the snippet relies on the same defaults the
/// manager would apply.
///
/// ```
/// use std::time::Duration;
/// use tiny_toast::notifications::ToastOptions;
/// use tiny_toast::snippet;
///
/// let code = snippet::render("Hello", &ToastOptions::new().timeout(Duration::from_millis(2000)));
/// assert!(code.contains(".timeout(Duration::from_millis(2000))"));
/// ```
#[must_use]
pub fn render(message: &str, options: &ToastOptions) -> String {
    let mut calls: Vec<String> = Vec::new();
    if let Some(timeout) = options.timeout_value() {
        calls.push(format!(".timeout({})", millis(timeout)));
    }
    if let Some(paused) = options.paused_value() {
        calls.push(format!(".pause({paused})"));
    }
    if let Some(variant) = options.variant_value() {
        calls.push(format!(".variant({})", variant_path(variant)));
    }
    if let Some(delay) = options.delay_value() {
        calls.push(format!(".delay({})", millis(delay)));
    }
    if let Some(position) = options.position_value() {
        calls.push(format!(".position({})", position_path(position)));
    }
    if let Some(key) = options.dedupe_key_value() {
        calls.push(format!(".dedupe_key({key:?})"));
    }
    if let Some(class_name) = options.class_name_value() {
        calls.push(format!(".class_name({class_name:?})"));
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "let id = manager.show(");
    let _ = writeln!(out, "{INDENT}{message:?},");
    if calls.is_empty() {
        let _ = writeln!(out, "{INDENT}ToastOptions::new(),");
    } else {
        let _ = writeln!(out, "{INDENT}ToastOptions::new()");
        let last = calls.len() - 1;
        for (i, call) in calls.iter().enumerate() {
            let trailer = if i == last { "," } else { "" };
            let _ = writeln!(out, "{INDENT}{INDENT}{call}{trailer}");
        }
    }
    out.push_str(");");
    out
}

/// Renders the snippet for a sticky toast closed by the user.
#[must_use]
pub fn render_sticky(message: &str, class_name: Option<&str>) -> String {
    let mut options = ToastOptions::new().pause(true);
    if let Some(class_name) = class_name {
        options = options.class_name(class_name);
    }
    let mut out = render(message, &options);
    out.push_str("\n\n// Later, when the close button is clicked:\nmanager.remove(id);");
    out
}
