use crate::models::LogType;

/// College codes the dashboard knows about.
pub const COLLEGE_CODES: [&str; 7] = ["CITC", "COT", "CSTE", "COM", "CSM", "CEA", "SHS"];

/// Demonstration data behind the per-college counters. This list is
/// compiled into the binary and is deliberately not connected to the
/// `logs` table: inserting real log rows never changes these counts.
const DEMO_LOG_DATA: [(&str, LogType); 19] = [
    ("CITC", LogType::TimeIn),
    ("CITC", LogType::TimeIn),
    ("CITC", LogType::TimeOut),
    ("CITC", LogType::TimeIn),
    ("CITC", LogType::TimeIn),
    ("COT", LogType::TimeIn),
    ("COT", LogType::TimeOut),
    ("COT", LogType::TimeIn),
    ("CSTE", LogType::TimeIn),
    ("CSTE", LogType::TimeIn),
    ("CSTE", LogType::TimeOut),
    ("CSTE", LogType::TimeIn),
    ("COM", LogType::TimeIn),
    ("CSM", LogType::TimeIn),
    ("CSM", LogType::TimeIn),
    ("CSM", LogType::TimeOut),
    ("CSM", LogType::TimeOut),
    ("CEA", LogType::TimeIn),
    ("SHS", LogType::TimeIn),
];

pub fn is_known_code(code: &str) -> bool {
    COLLEGE_CODES.contains(&code)
}

/// Time-In minus Time-Out within the demonstration list for one college.
/// Same shape as the occupancy aggregate over `logs`, so a real
/// per-college query could replace this without changing callers.
pub fn remaining_for(code: &str) -> i64 {
    let count = |log_type: LogType| {
        DEMO_LOG_DATA
            .iter()
            .filter(|(c, t)| *c == code && *t == log_type)
            .count() as i64
    };

    count(LogType::TimeIn) - count(LogType::TimeOut)
}
