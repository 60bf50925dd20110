//! The set of invitation codes that unlock the showcase.

/// Codes honored when no override is configured.
const DEFAULT_CODES: [&str; 5] = ["RARITY2025", "EXCLUSIVE", "LUXE", "MYSTIQUE", "ELITE"];

/// Allow-list of invitation codes.
///
/// Codes are matched case-insensitively and ignoring surrounding whitespace;
/// the canonical form kept here is trimmed uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteAllowlist {
    codes: Vec<String>,
}

impl InviteAllowlist {
    /// Build an allow-list from arbitrary code strings.
    ///
    /// Entries are normalized to trimmed uppercase; blank entries and
    /// duplicates are dropped. An empty iterator yields an allow-list that
    /// rejects everything.
    pub fn new(codes: impl IntoIterator<Item = String>) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for code in codes {
            let code = Self::normalize(&code);
            if !code.is_empty() && !normalized.contains(&code) {
                normalized.push(code);
            }
        }
        Self { codes: normalized }
    }

    /// The built-in allow-list.
    pub fn with_default_codes() -> Self {
        Self::new(DEFAULT_CODES.iter().map(|code| (*code).to_string()))
    }

    /// Canonical form of a submitted code: trimmed, uppercased.
    pub fn normalize(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Whether `code` matches one of the listed invitation codes.
    ///
    /// The answer never distinguishes *why* a code failed; callers get a plain
    /// yes/no so rejection responses cannot leak the list.
    pub fn validate_code(&self, code: &str) -> bool {
        let code = Self::normalize(code);
        !code.is_empty() && self.codes.iter().any(|known| *known == code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for InviteAllowlist {
    fn default() -> Self {
        Self::with_default_codes()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
