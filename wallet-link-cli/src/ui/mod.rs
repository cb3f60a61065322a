//! Terminal UI utilities
//!
//! Status lines go to stderr so command results on stdout stay pipeable.

use colored::Colorize;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Display a QR code in the terminal
pub fn qr_code(data: &str) -> anyhow::Result<()> {
    use qrcode::render::unicode;
    use qrcode::QrCode;

    let code = QrCode::new(data)?;
    let string = code
        .render::<unicode::Dense1x2>()
        .quiet_zone(false)
        .build();

    println!("\n{}\n", string);
    Ok(())
}

/// Print a separator line
pub fn separator() {
    eprintln!("{}", "─".repeat(60).dimmed());
}

/// Print JSON prettily
pub fn json(value: &serde_json::Value) {
    if let Ok(pretty) = serde_json::to_string_pretty(value) {
        println!("{}", pretty);
    }
}
