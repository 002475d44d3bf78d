/// Console and log file output
///
/// - `debug_print`: solver internals, off unless `debug_print_on()` is called
/// - `test_print`: progress and results, on by default, also copied to the log
///   file once `init_log_file()` has been called
///
/// The flags are process-wide so that any module can print without being
/// handed a logger; they only gate output, never results.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use separator::Separatable;

static DEBUG_FLAG: AtomicBool = AtomicBool::new(false);
static TEST_FLAG: AtomicBool = AtomicBool::new(true);

// Global log file handle (wrapped in Mutex for thread safety)
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Open a log file named after the current local time, returns its name
pub fn init_log_file() -> std::io::Result<String> {
    let now = chrono::Local::now();
    let filename = format!("log_set_solver_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&filename)?;
    if let Ok(mut log_guard) = LOG_FILE.lock() {
        *log_guard = Some(file);
    }
    return Ok(filename);
}

/// Write to log file if it's open
fn write_to_log(msg: &str) {
    if let Ok(mut log_guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_guard {
            let _ = writeln!(file, "{}", msg);
        }
    }
}

pub fn debug_print_on() {
    DEBUG_FLAG.store(true, Ordering::Relaxed);
}

pub fn debug_print_off() {
    DEBUG_FLAG.store(false, Ordering::Relaxed);
}

pub fn test_print_on() {
    TEST_FLAG.store(true, Ordering::Relaxed);
}

pub fn test_print_off() {
    TEST_FLAG.store(false, Ordering::Relaxed);
}

pub fn debug_print(msg: &str) {
    if DEBUG_FLAG.load(Ordering::Relaxed) {
        eprintln!("debug: {}", msg);
        write_to_log(&format!("debug: {}", msg));
    }
}

pub fn test_print(msg: &str) {
    if TEST_FLAG.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
    // Always write to log file if it's open
    write_to_log(msg);
}

pub fn banner(msg: &str) {
    test_print(&banner_text(msg));
}

/// The banner as printed: the message centered between two lines of '='
pub fn banner_text(msg: &str) -> String {
    // set the banner's width
    const BANNER_WIDTH: usize = 80;
    // truncate the message if needed (by characters, not bytes)
    let titre: String = msg.chars().take(BANNER_WIDTH).collect();
    // compute the required spaces before and after the message
    let total_padding = BANNER_WIDTH - titre.chars().count();
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    let line = "=".repeat(BANNER_WIDTH);
    format!(
        "\n{}\n{}{}{}\n{}\n",
        line,
        " ".repeat(left_padding),
        titre,
        " ".repeat(right_padding),
        line
    )
}

/// One line summary of a solver run, e.g.
///    ... pair solver found       1.080 sets in     0.0012 seconds
pub fn created_a_total_of(nb: usize, solver: &str, elapsed_secs: f64) -> String {
    format!(
        "   ... {:<13} found {:>11} sets in {:>10.4} seconds",
        solver,
        nb.separated_string(),
        elapsed_secs
    )
}
