use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{EnumIter, EnumMessage, IntoEnumIterator};

/// 可选的过期时长（天）
///
/// Serialized as the bare number of days, matching the backend's
/// `expiry_days` field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize_repr,
    Deserialize_repr,
    EnumIter,
    EnumMessage,
)]
#[repr(u32)]
pub enum ExpiryOption {
    #[strum(message = "1 day")]
    OneDay = 1,
    #[strum(message = "7 days")]
    SevenDays = 7,
    #[default]
    #[strum(message = "30 days")]
    ThirtyDays = 30,
    #[strum(message = "90 days")]
    NinetyDays = 90,
    #[strum(message = "1 year")]
    OneYear = 365,
}

impl ExpiryOption {
    pub fn days(self) -> u32 {
        self as u32
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::iter().find(|opt| opt.days() == days)
    }

    /// Human label as shown in the expiry selector
    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or("")
    }

    /// "1, 7, 30, 90, 365" for error messages
    pub fn allowed_values() -> String {
        Self::iter()
            .map(|opt| opt.days().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 循环切换到下一个选项
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|o| *o == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// 循环切换到上一个选项
    pub fn prev(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|o| *o == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for ExpiryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ExpiryOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid expiry '{}': expected a number of days", s))?;
        Self::from_days(days).ok_or_else(|| {
            format!(
                "Invalid expiry '{}'. Valid: {}",
                s,
                Self::allowed_values()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_thirty_days() {
        assert_eq!(ExpiryOption::default().days(), 30);
    }

    #[test]
    fn test_from_days_only_accepts_listed_values() {
        for days in [1, 7, 30, 90, 365] {
            assert_eq!(ExpiryOption::from_days(days).map(|o| o.days()), Some(days));
        }
        assert_eq!(ExpiryOption::from_days(0), None);
        assert_eq!(ExpiryOption::from_days(14), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ExpiryOption::OneDay.label(), "1 day");
        assert_eq!(ExpiryOption::SevenDays.label(), "7 days");
        assert_eq!(ExpiryOption::OneYear.to_string(), "1 year");
    }

    #[test]
    fn test_cycling_wraps_around() {
        assert_eq!(ExpiryOption::OneYear.next(), ExpiryOption::OneDay);
        assert_eq!(ExpiryOption::OneDay.prev(), ExpiryOption::OneYear);
        assert_eq!(ExpiryOption::ThirtyDays.next(), ExpiryOption::NinetyDays);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&ExpiryOption::NinetyDays).unwrap(), "90");
        let parsed: ExpiryOption = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ExpiryOption::SevenDays);
        assert!(serde_json::from_str::<ExpiryOption>("8").is_err());
    }

    #[test]
    fn test_from_str_error_lists_valid_values() {
        let err = "12".parse::<ExpiryOption>().unwrap_err();
        assert!(err.contains("1, 7, 30, 90, 365"), "got: {}", err);
        assert!("abc".parse::<ExpiryOption>().is_err());
        assert_eq!(" 365 ".parse::<ExpiryOption>(), Ok(ExpiryOption::OneYear));
    }
}
