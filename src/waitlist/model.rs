use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

pub const MIN_AGE: u8 = 13;
pub const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipPlan {
    Starter,
    #[default]
    Unlimited,
    Elite,
}

impl MembershipPlan {
    pub const ALL: [MembershipPlan; 3] = [Self::Starter, Self::Unlimited, Self::Elite];

    pub fn id(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Unlimited => "unlimited",
            Self::Elite => "elite",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Unlimited => "Unlimited",
            Self::Elite => "Elite",
        }
    }

    pub fn monthly_price(self) -> u32 {
        match self {
            Self::Starter => 40,
            Self::Unlimited => 80,
            Self::Elite => 120,
        }
    }

    /// Label used in the waitlist select, e.g. "Starter - $40/month".
    pub fn option_label(self) -> String {
        format!("{} - ${}/month", self.name(), self.monthly_price())
    }
}

impl fmt::Display for MembershipPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MembershipPlan {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s.trim())
            .ok_or_else(|| ValidationError::UnknownPlan(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassTag {
    Dance,
    Yoga,
    Calisthenics,
    Workshops,
    PrivateSessions,
    PrivateEvents,
}

impl ClassTag {
    pub const ALL: [ClassTag; 6] = [
        Self::Dance,
        Self::Yoga,
        Self::Calisthenics,
        Self::Workshops,
        Self::PrivateSessions,
        Self::PrivateEvents,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Dance => "dance",
            Self::Yoga => "yoga",
            Self::Calisthenics => "calisthenics",
            Self::Workshops => "workshops",
            Self::PrivateSessions => "private-sessions",
            Self::PrivateEvents => "private-events",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dance => "Dance",
            Self::Yoga => "Yoga",
            Self::Calisthenics => "Calisthenics",
            Self::Workshops => "Workshops",
            Self::PrivateSessions => "Private Sessions",
            Self::PrivateEvents => "Private Events",
        }
    }
}

/// Text inputs on the waitlist form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
}

/// Raw form state as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaitlistDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub membership: MembershipPlan,
    pub interests: BTreeSet<ClassTag>,
}

impl WaitlistDraft {
    pub fn with_plan(membership: MembershipPlan) -> Self {
        Self {
            membership,
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Age => self.age = value,
        }
    }

    pub fn toggle_interest(&mut self, tag: ClassTag, checked: bool) {
        if checked {
            self.interests.insert(tag);
        } else {
            self.interests.remove(&tag);
        }
    }

    /// Applies the form constraints and returns the value to send.
    pub fn validate(&self) -> Result<WaitlistSubmission, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }

        let age = parse_age(&self.age)?;

        Ok(WaitlistSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            age,
            membership: self.membership,
            interests: self.interests.iter().copied().collect(),
        })
    }
}

fn parse_age(raw: &str) -> Result<u8, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingAge);
    }
    let out_of_range = ValidationError::AgeOutOfRange {
        min: MIN_AGE,
        max: MAX_AGE,
    };
    // Parsed as f64 so every spelling a number input accepts ("36.0", "1e2") gets
    // the same whole-number and range check.
    let age = raw.parse::<f64>().map_err(|_| out_of_range.clone())?;
    let in_range = (f64::from(MIN_AGE)..=f64::from(MAX_AGE)).contains(&age);
    if !age.is_finite() || age.fract() != 0.0 || !in_range {
        return Err(out_of_range);
    }
    Ok(age as u8)
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Validated waitlist entry; this is the JSON body posted to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub membership: MembershipPlan,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<ClassTag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> WaitlistDraft {
        WaitlistDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "(555) 123-4567".into(),
            age: "36".into(),
            ..WaitlistDraft::default()
        }
    }

    #[test]
    fn default_plan_is_unlimited() {
        assert_eq!(WaitlistDraft::default().membership, MembershipPlan::Unlimited);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [("12", false), ("13", true), ("120", true), ("121", false)] {
            let mut d = filled();
            d.set(Field::Age, age.into());
            assert_eq!(d.validate().is_ok(), ok, "age {age}");
        }
    }

    #[test]
    fn age_accepts_other_number_spellings() {
        for (age, want) in [("36.0", Some(36)), ("1e2", Some(100)), ("13.00", Some(13))] {
            let mut d = filled();
            d.set(Field::Age, age.into());
            assert_eq!(d.validate().ok().map(|s| s.age), want, "age {age}");
        }
        for age in ["12.0", "120.5", "36.5", "-0", "inf", "NaN"] {
            let mut d = filled();
            d.set(Field::Age, age.into());
            assert_eq!(
                d.validate(),
                Err(ValidationError::AgeOutOfRange { min: 13, max: 120 }),
                "age {age}"
            );
        }
    }

    #[test]
    fn non_numeric_and_blank_age_rejected() {
        let mut d = filled();
        d.set(Field::Age, "abc".into());
        assert_eq!(
            d.validate(),
            Err(ValidationError::AgeOutOfRange { min: 13, max: 120 })
        );
        d.set(Field::Age, "  ".into());
        assert_eq!(d.validate(), Err(ValidationError::MissingAge));
    }

    #[test]
    fn required_fields_checked_in_form_order() {
        let mut d = filled();
        d.set(Field::Name, "   ".into());
        d.set(Field::Phone, "".into());
        assert_eq!(d.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn email_shape() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "a b@x.io", "a@b@c.io"] {
            let mut d = filled();
            d.set(Field::Email, bad.into());
            assert_eq!(d.validate(), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn validate_trims_text() {
        let mut d = filled();
        d.set(Field::Name, "  Ada  ".into());
        let s = d.validate().unwrap();
        assert_eq!(s.name, "Ada");
        assert_eq!(s.age, 36);
    }

    #[test]
    fn payload_shape() {
        let mut d = filled();
        d.membership = MembershipPlan::Elite;
        d.toggle_interest(ClassTag::Yoga, true);
        d.toggle_interest(ClassTag::PrivateSessions, true);
        d.toggle_interest(ClassTag::Dance, true);
        d.toggle_interest(ClassTag::Dance, false);

        let body = serde_json::to_value(d.validate().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "(555) 123-4567",
                "age": 36,
                "membership": "elite",
                "interests": ["yoga", "private-sessions"],
            })
        );
    }

    #[test]
    fn empty_interests_are_omitted() {
        let body = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert!(body.get("interests").is_none());
        assert_eq!(body["membership"], "unlimited");
    }

    #[test]
    fn plan_ids_parse() {
        assert_eq!("starter".parse::<MembershipPlan>(), Ok(MembershipPlan::Starter));
        assert_eq!(
            "gold".parse::<MembershipPlan>(),
            Err(ValidationError::UnknownPlan("gold".into()))
        );
        assert_eq!(MembershipPlan::Elite.option_label(), "Elite - $120/month");
    }
}
