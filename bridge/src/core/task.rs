//! Registry of task names callers may invoke.

/// Every task the bridge exposes, keyed by its exact, case-sensitive wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    EnsureDirectoryExistence,
    IncrementStatusCount,
    GetStatusCounts,
    WriteAppliedCounts,
    ListFilesInDir,
    ReadJsonFile,
    WriteJsonFile,
    GetHomeDir,
    LogApplicationInfo,
    LogApplicationError,
    LogInfo,
    LogError,
    WriteCsv,
    DeleteFile,
    ExitProcess,
}

impl TaskName {
    pub const ALL: [TaskName; 15] = [
        TaskName::EnsureDirectoryExistence,
        TaskName::IncrementStatusCount,
        TaskName::GetStatusCounts,
        TaskName::WriteAppliedCounts,
        TaskName::ListFilesInDir,
        TaskName::ReadJsonFile,
        TaskName::WriteJsonFile,
        TaskName::GetHomeDir,
        TaskName::LogApplicationInfo,
        TaskName::LogApplicationError,
        TaskName::LogInfo,
        TaskName::LogError,
        TaskName::WriteCsv,
        TaskName::DeleteFile,
        TaskName::ExitProcess,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|task| task.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskName::EnsureDirectoryExistence => "ensureDirectoryExistence",
            TaskName::IncrementStatusCount => "incrementStatusCount",
            TaskName::GetStatusCounts => "getStatusCounts",
            TaskName::WriteAppliedCounts => "writeAppliedCounts",
            TaskName::ListFilesInDir => "listFilesInDir",
            TaskName::ReadJsonFile => "readJsonFile",
            TaskName::WriteJsonFile => "writeJsonFile",
            TaskName::GetHomeDir => "getHomeDir",
            TaskName::LogApplicationInfo => "logApplicationInfo",
            TaskName::LogApplicationError => "logApplicationError",
            TaskName::LogInfo => "logInfo",
            TaskName::LogError => "logError",
            TaskName::WriteCsv => "writeCSV",
            TaskName::DeleteFile => "deleteFile",
            TaskName::ExitProcess => "exitProcess",
        }
    }
}
