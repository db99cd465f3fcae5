use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Daily attendance status as recorded by the upstream store.
///
/// Records arrive as free-form strings; anything outside the four known
/// values is preserved as `Other` and counts as "not Present" wherever a
/// present/absent split is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
    Late,
    Other(String),
}

impl AttendanceStatus {
    pub fn parse(raw: &str) -> AttendanceStatus {
        match raw {
            "Present" => AttendanceStatus::Present,
            "Absent" => AttendanceStatus::Absent,
            "Excused" => AttendanceStatus::Excused,
            "Late" => AttendanceStatus::Late,
            other => AttendanceStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Other(raw) => raw,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }

    /// Indonesian display label used by the report and chart consumers.
    /// Unknown statuses pass through unchanged.
    pub fn label_id(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Hadir",
            AttendanceStatus::Absent => "Tidak Hadir",
            AttendanceStatus::Excused => "Izin",
            AttendanceStatus::Late => "Terlambat",
            AttendanceStatus::Other(raw) => raw,
        }
    }

    pub fn display_color(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "#10B981",
            AttendanceStatus::Absent => "#EF4444",
            AttendanceStatus::Excused => "#3B82F6",
            AttendanceStatus::Late => "#F59E0B",
            AttendanceStatus::Other(_) => "black",
        }
    }
}

impl Serialize for AttendanceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AttendanceStatus::parse(&raw))
    }
}

/// One scored assessment for a student. Immutable for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeEntry {
    pub title: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub score: f64,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

fn default_subject() -> String {
    "General".to_string()
}

fn default_kind() -> String {
    "Assignment".to_string()
}

/// One daily attendance record for a student. At most one entry exists per
/// (student, calendar day); that uniqueness is enforced upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An attendance record paired with the student it belongs to, as returned
/// by class-scoped queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDayRecord {
    pub student: String,
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The slice of the upstream user document the engines consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_level: Option<String>,
    #[serde(rename = "studentId", default, skip_serializing_if = "Option::is_none")]
    pub student_no: Option<String>,
    #[serde(rename = "isActive", default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_evaluation: Option<String>,
    #[serde(rename = "isBanned", default)]
    pub banned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ban_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ban_expires: Option<DateTime<Utc>>,
    #[serde(rename = "lastMessageSentAt", default, skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Default for StudentProfile {
    fn default() -> Self {
        StudentProfile {
            id: None,
            name: String::new(),
            class_level: None,
            student_no: None,
            active: true,
            address: None,
            manual_evaluation: None,
            banned: false,
            ban_reason: None,
            ban_expires: None,
            last_message_at: None,
            registered_at: None,
        }
    }
}
