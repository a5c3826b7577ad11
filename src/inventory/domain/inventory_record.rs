use crate::inventory::domain::{ResolvedCaptureTime, ResolvedHostname};
use crate::shared::error::GrabberError;
use crate::shared::Result;
use chrono::NaiveDateTime;

/// NewType wrapper for a hardware serial number (the dedup key)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(serial: String) -> Result<Self> {
        let serial = serial.trim().to_string();
        if serial.is_empty() {
            return Err(GrabberError::Validation {
                message: "Serial number cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(serial))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a vendor product ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(pid: String) -> Result<Self> {
        let pid = pid.trim().to_string();
        if pid.is_empty() {
            return Err(GrabberError::Validation {
                message: "Product ID cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(pid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Block-level facts stamped onto every record extracted from one capture
#[derive(Debug, Clone)]
pub struct CaptureContext {
    pub hostname: ResolvedHostname,
    pub capture_time: ResolvedCaptureTime,
    pub source_identifier: String,
    pub group_label: Option<String>,
}

impl CaptureContext {
    pub fn new(
        hostname: ResolvedHostname,
        capture_time: ResolvedCaptureTime,
        source_identifier: String,
        group_label: Option<String>,
    ) -> Self {
        Self {
            hostname,
            capture_time,
            source_identifier,
            group_label,
        }
    }
}

/// One hardware component reported in one capture.
///
/// Immutable once built: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    hostname: String,
    hostname_priority: u8,
    capture_time: Option<NaiveDateTime>,
    capture_time_raw: Option<String>,
    serial_number: SerialNumber,
    product_id: ProductId,
    name: String,
    description: String,
    source_identifier: String,
    group_label: Option<String>,
}

impl InventoryRecord {
    pub fn new(
        context: &CaptureContext,
        name: String,
        description: String,
        product_id: ProductId,
        serial_number: SerialNumber,
    ) -> Self {
        Self {
            hostname: context.hostname.name().to_string(),
            hostname_priority: context.hostname.priority(),
            capture_time: context.capture_time.value(),
            capture_time_raw: context.capture_time.raw().map(str::to_string),
            serial_number,
            product_id,
            name,
            description,
            source_identifier: context.source_identifier.clone(),
            group_label: context.group_label.clone(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn hostname_priority(&self) -> u8 {
        self.hostname_priority
    }

    pub fn capture_time(&self) -> Option<NaiveDateTime> {
        self.capture_time
    }

    pub fn capture_time_raw(&self) -> Option<&str> {
        self.capture_time_raw.as_deref()
    }

    pub fn serial_number(&self) -> &str {
        self.serial_number.as_str()
    }

    pub fn product_id(&self) -> &str {
        self.product_id.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Character count of the description, the second dedup tie-breaker
    pub fn description_length(&self) -> usize {
        self.description.chars().count()
    }

    pub fn source_identifier(&self) -> &str {
        &self.source_identifier
    }

    pub fn group_label(&self) -> Option<&str> {
        self.group_label.as_deref()
    }
}
