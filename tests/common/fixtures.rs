//! Static raw-log corpora used across harnesses.

use loglens::Level;

/// The canonical two-entry file: an error with a stack trace, then a bare
/// info entry.
pub const RAW_ERROR_THEN_INFO: &str = "[2023-01-01 10:00:00] local.ERROR: boom\n\
                                       #0 foo()\n\
                                       #1 bar()\n\
                                       [2023-01-01 10:05:00] local.INFO: ok\n";

/// A busier file: four levels, one multi-line stack, one blank line inside a
/// stack, and a trailing entry without a newline.
pub const RAW_MIXED: &str = "\
[2023-04-01 08:00:00] production.CRITICAL: database gone
#0 PDO->connect()
#1 Illuminate\\Database\\Connectors\\Connector->createConnection()

#2 {main}
[2023-04-01 08:01:00] production.ERROR: request aborted
[2023-04-01 08:02:30] production.WARNING: queue lagging
[2023-04-01 08:02:30] production.WARNING: queue lagging
[2023-04-01 09:15:00] production.INFO: queue drained";

/// Content with no header line at all.
pub const RAW_NO_HEADERS: &str = "plain text\nstill plain\n";

/// Build a raw file with `count` entries per `(level, count)` pair, headers
/// in the given order, one second apart.
pub fn raw_with_counts(counts: &[(Level, usize)]) -> String {
    let mut raw = String::new();
    let mut second = 0;
    for &(level, count) in counts {
        for i in 0..count {
            raw.push_str(&format!(
                "[2023-07-07 10:{:02}:{:02}] testing.{}: message {}\n",
                second / 60,
                second % 60,
                level.token(),
                i,
            ));
            second += 1;
        }
    }
    raw
}
