/// All user-facing messages of the application.
///
/// Every string shown to the user goes through this enum and its `Display`
/// implementation, keeping wording in one place and making the msg_* macros
/// type-safe about their parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ServerConfigNotFound,

    // === FETCH MESSAGES ===
    RecordsFetched(usize),

    // === CHART MESSAGES ===
    ChartSaved(String),                // output path
    NoRecordsInRange(String, String),  // start, end
    RecordsHeader(String, String),     // start, end

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // output path

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerApiUrl,
}
