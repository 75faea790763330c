// src/banner.rs

/// Prints the server startup banner to the console.
pub fn print_banner() {
    let banner = r#"
     _   ____
 ___| |_|___ \ _ __  _   _
/ __| __| __) | '_ \| | | |
\__ \ |_ / __/| |_) | |_| |
|___/\__|_____| .__/ \__, |
              |_|    |___/

    Structured Text to Python converter
"#;
    println!("{}", banner);
}
