//! Mô hình dữ liệu lõi cho thành phần hiển thị thông báo theo mức độ nghiêm trọng.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Class của container khi hiển thị icon.
pub const CONTAINER_CLASS: &str = "ui-messages ui-widget";
/// Class của container khi tắt icon.
pub const ICONLESS_CONTAINER_CLASS: &str = "ui-messages ui-messages-noicon ui-widget";
/// Tiền tố class cho từng khối mức độ (`ui-messages-error`...).
pub const SEVERITY_PREFIX_CLASS: &str = "ui-messages-";
/// Class bo góc cho mỗi khối mức độ.
pub const CORNER_CLASS: &str = "ui-corner-all";
/// Class của liên kết đóng khối.
pub const CLOSE_LINK_CLASS: &str = "ui-messages-close";
/// Class của icon bên trong liên kết đóng.
pub const CLOSE_ICON_CLASS: &str = "ui-icon ui-icon-close";
/// Hành vi phía client của nút đóng: trượt lên và ẩn khối cha.
pub const CLOSE_ACTION: &str = "$(this).parent().slideUp();return false;";

/// Mức độ nghiêm trọng chuẩn. Thứ tự khai báo cũng là thứ tự hiển thị.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Bốn mức độ theo thứ tự cố định info, warn, error, fatal.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Tra mức độ theo tên chính xác; tên lạ trả về `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.as_str() == name)
    }

    /// Vị trí của mức độ trong `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nhãn mức độ đúng như kho thông báo lưu, có thể không thuộc bốn mức chuẩn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityCode(String);

impl SeverityCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Severity> for SeverityCode {
    fn from(severity: Severity) -> Self {
        Self(severity.as_str().to_string())
    }
}

impl From<&str> for SeverityCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Kết quả phân loại một nhãn mức độ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Recognized(Severity),
    /// Nhãn lạ: thông báo bị bỏ qua, không phải lỗi.
    Unrecognized,
}

/// Định danh thông báo do kho cấp. Hai thông báo trùng nội dung vẫn khác định danh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Một thông báo hướng tới người dùng.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub severity: SeverityCode,
    pub summary: String,
    pub detail: Option<String>,
    /// Đã được hiển thị trong request hiện tại. Chỉ kho thông báo thay đổi cờ này.
    #[serde(default)]
    pub consumed: bool,
}

impl Message {
    pub fn new(id: MessageId, severity: impl Into<SeverityCode>, summary: impl Into<String>) -> Self {
        Self {
            id,
            severity: severity.into(),
            summary: summary.into(),
            detail: None,
            consumed: false,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Nội dung chi tiết; khi thiếu thì dùng lại phần tóm tắt.
    pub fn detail_or_summary(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.summary)
    }
}

/// Cách hiểu giá trị `for` của widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ForType {
    /// Khóa tra cứu nguyên văn.
    Key,
    /// Biểu thức cần resolver chuyển thành định danh widget.
    Expression,
}

impl FromStr for ForType {
    type Err = MessagesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "key" => Ok(ForType::Key),
            "expression" => Ok(ForType::Expression),
            other => Err(MessagesError::InvalidConfig(format!(
                "forType không hỗ trợ: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for ForType {
    type Error = MessagesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Cấu hình chỉ đọc của widget hiển thị thông báo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Định danh ổn định của container.
    pub id: String,
    #[serde(rename = "for")]
    pub for_target: Option<String>,
    pub for_type: Option<ForType>,
    pub global_only: bool,
    pub show_icon: bool,
    pub show_summary: bool,
    pub show_detail: bool,
    pub escape: bool,
    pub closable: bool,
    pub style: Option<String>,
    pub style_class: Option<String>,
    /// Danh sách mức độ được phép hiển thị, ví dụ `"warn,error"`.
    pub severity: Option<String>,
    pub redisplay: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            id: "messages".to_string(),
            for_target: None,
            for_type: None,
            global_only: false,
            show_icon: true,
            show_summary: true,
            show_detail: false,
            escape: true,
            closable: false,
            style: None,
            style_class: None,
            severity: None,
            redisplay: true,
        }
    }
}

impl WidgetConfig {
    /// Giá trị `for` đã bỏ trường hợp rỗng hoặc chỉ có khoảng trắng.
    pub fn target(&self) -> Option<&str> {
        self.for_target
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// Class đầy đủ của container, gồm cả class người dùng bổ sung.
    pub fn container_class(&self) -> String {
        let base = if self.show_icon {
            CONTAINER_CLASS
        } else {
            ICONLESS_CONTAINER_CLASS
        };

        match self.style_class.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
            _ => base.to_string(),
        }
    }
}

/// Xác nhận trả về kho thông báo: những thông báo đã hiển thị trong lượt render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderReceipt {
    pub generated_at: DateTime<Utc>,
    pub displayed: Vec<MessageId>,
}

impl RenderReceipt {
    pub fn new(displayed: Vec<MessageId>) -> Self {
        Self {
            generated_at: Utc::now(),
            displayed,
        }
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    pub fn contains(&self, id: MessageId) -> bool {
        self.displayed.contains(&id)
    }
}

/// Lỗi chung khi hiển thị thông báo.
#[derive(Debug, thiserror::Error)]
pub enum MessagesError {
    #[error("Ghi markup thất bại: {0}")]
    Sink(#[from] std::io::Error),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Cấu hình không hợp lệ: {0}")]
    InvalidConfig(String),
}
