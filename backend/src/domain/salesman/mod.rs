//! Salesman aggregate and its nested social performance records.
//!
//! The JSON shape produced by serde here is the wire shape of the REST API:
//! `camelCase` keys, optional profile fields omitted when absent, and any extra
//! attributes a client supplied on creation echoed back untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Numeric salesman identifier.
///
/// # Examples
/// ```
/// use salesmen::domain::Sid;
///
/// assert_eq!(Sid::parse_lenient(" 101 "), Some(Sid::new(101)));
/// assert_eq!(Sid::parse_lenient("101.0"), Some(Sid::new(101)));
/// assert_eq!(Sid::parse_lenient("abc"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sid(i64);

impl Sid {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Coerce free-form text (typically a path segment) into a sid.
    ///
    /// Surrounding whitespace is ignored and integral decimal notation such as
    /// `101.0` or `1.01e2` is accepted. Anything else, including fractional or
    /// out-of-range values, yields `None` so callers can treat it as an unknown
    /// salesman rather than a malformed request.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Some(Self(value));
        }
        trimmed.parse::<f64>().ok().and_then(Self::from_integral_float)
    }

    /// Convert a JSON number into a sid under the same rule as
    /// [`Sid::parse_lenient`]: integers and integral floats only.
    ///
    /// # Examples
    /// ```
    /// use salesmen::domain::Sid;
    /// use serde_json::Number;
    ///
    /// let integral = Number::from_f64(104.0).expect("finite");
    /// assert_eq!(Sid::from_number(&integral), Some(Sid::new(104)));
    /// let fractional = Number::from_f64(104.5).expect("finite");
    /// assert_eq!(Sid::from_number(&fractional), None);
    /// ```
    #[must_use]
    pub fn from_number(number: &Number) -> Option<Self> {
        number
            .as_i64()
            .map(Self)
            .or_else(|| number.as_f64().and_then(Self::from_integral_float))
    }

    /// Integral, finite floats within `i64` range. Goes through the decimal
    /// rendering so out-of-range magnitudes fail to parse instead of
    /// saturating.
    fn from_integral_float(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        format!("{value:.0}").parse::<i64>().ok().map(Self)
    }
}

impl From<i64> for Sid {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One skill assessment attached to a salesman.
///
/// `skill` keys the record within its parent. `social_score` keeps the exact
/// JSON number the client sent, so `0` stays `0` rather than becoming `0.0`;
/// an explicit `null` score is kept as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPerformanceRecord {
    skill: String,
    social_score: Option<Number>,
}

impl SocialPerformanceRecord {
    /// Build a scored record from a skill name and score.
    #[must_use]
    pub fn new(skill: impl Into<String>, social_score: impl Into<Number>) -> Self {
        Self::with_score(skill, Some(social_score.into()))
    }

    /// Build a record whose score may be `null`.
    #[must_use]
    pub fn with_score(skill: impl Into<String>, social_score: Option<Number>) -> Self {
        Self {
            skill: skill.into(),
            social_score,
        }
    }

    /// Skill assessed by this record.
    #[must_use]
    pub fn skill(&self) -> &str {
        self.skill.as_str()
    }

    /// Score awarded for the skill, `None` when the client sent `null`.
    #[must_use]
    pub const fn social_score(&self) -> Option<&Number> {
        self.social_score.as_ref()
    }
}

/// A sales employee together with their performance records.
///
/// # Examples
/// ```
/// use salesmen::domain::{Salesman, Sid, SocialPerformanceRecord};
///
/// let mut salesman = Salesman::new(Sid::new(104), "Jane", "Roe");
/// salesman.push_record(SocialPerformanceRecord::new("Teamwork", 90));
/// assert_eq!(salesman.records().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salesman {
    sid: Sid,
    firstname: String,
    lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supervisor: Option<String>,
    #[serde(default)]
    social_performance_records: Vec<SocialPerformanceRecord>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Salesman {
    /// Create a salesman with no optional fields and no records.
    #[must_use]
    pub fn new(sid: Sid, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            sid,
            firstname: firstname.into(),
            lastname: lastname.into(),
            job_title: None,
            sub_unit: None,
            supervisor: None,
            social_performance_records: Vec::new(),
            attributes: Map::new(),
        }
    }

    /// Set the job title.
    #[must_use]
    pub fn with_job_title(mut self, job_title: Option<String>) -> Self {
        self.job_title = job_title;
        self
    }

    /// Set the organisational sub-unit.
    #[must_use]
    pub fn with_sub_unit(mut self, sub_unit: Option<String>) -> Self {
        self.sub_unit = sub_unit;
        self
    }

    /// Set the supervisor's name.
    #[must_use]
    pub fn with_supervisor(mut self, supervisor: Option<String>) -> Self {
        self.supervisor = supervisor;
        self
    }

    /// Replace the record sequence.
    #[must_use]
    pub fn with_records(mut self, records: Vec<SocialPerformanceRecord>) -> Self {
        self.social_performance_records = records;
        self
    }

    /// Attach client-supplied attributes that have no dedicated field.
    ///
    /// Keys colliding with a dedicated field are dropped.
    #[must_use]
    pub fn with_attributes(mut self, mut attributes: Map<String, Value>) -> Self {
        for key in RESERVED_KEYS {
            attributes.remove(*key);
        }
        self.attributes = attributes;
        self
    }

    /// Identifier, not necessarily unique within a store.
    #[must_use]
    pub const fn sid(&self) -> Sid {
        self.sid
    }

    /// Given name.
    #[must_use]
    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Job title, when supplied.
    #[must_use]
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    /// Organisational sub-unit, when supplied.
    #[must_use]
    pub fn sub_unit(&self) -> Option<&str> {
        self.sub_unit.as_deref()
    }

    /// Supervisor's name, when supplied.
    #[must_use]
    pub fn supervisor(&self) -> Option<&str> {
        self.supervisor.as_deref()
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[SocialPerformanceRecord] {
        &self.social_performance_records
    }

    /// Extra attributes echoed verbatim.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Append a record. Records sharing a skill are allowed to coexist.
    pub fn push_record(&mut self, record: SocialPerformanceRecord) {
        self.social_performance_records.push(record);
    }

    /// Drop every record whose skill equals `skill` exactly and return how
    /// many were removed.
    pub fn remove_records_with_skill(&mut self, skill: &str) -> usize {
        let before = self.social_performance_records.len();
        self.social_performance_records
            .retain(|record| record.skill != skill);
        before - self.social_performance_records.len()
    }
}

const RESERVED_KEYS: &[&str] = &[
    "sid",
    "firstname",
    "lastname",
    "jobTitle",
    "subUnit",
    "supervisor",
    "socialPerformanceRecords",
];
