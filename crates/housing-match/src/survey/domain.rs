use serde::{Deserialize, Serialize};

/// Canonicalized respondent input for one survey session. Built once by the
/// normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub name: String,
    pub email: String,
    pub prior_eviction: bool,
    pub time_frame: TimeFrame,
    pub needs_transit: bool,
    pub criminal_record: bool,
    /// Number of dependents, capped at 3 by the survey options ("3+").
    pub dependents: u8,
    /// Number of pets, capped at 2 by the survey options ("2+ pets").
    pub pets: u8,
    pub base_income: u32,
    pub partner_income: u32,
    /// Always base_income + partner_income; partner_income is 0 when the
    /// respondent does not combine income.
    pub total_income: u32,
    pub bedroom_pref: u32,
    pub bathroom_pref: u32,
    pub needs_accessible: bool,
    pub needs_garage: bool,
    /// Situation-specific follow-up answers; exactly one variant per record.
    pub situation: SituationDetails,
}

impl AnswerRecord {
    pub fn situation_kind(&self) -> HousingSituation {
        self.situation.kind()
    }
}

/// How soon the respondent needs housing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrame {
    WithinWeek,
    WithinMonth,
    WithinSixMonths,
    WithinYear,
}

impl TimeFrame {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::WithinWeek,
            2 => Self::WithinMonth,
            3 => Self::WithinSixMonths,
            _ => Self::WithinYear,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WithinWeek => "Within the week",
            Self::WithinMonth => "Within the month",
            Self::WithinSixMonths => "Within six months",
            Self::WithinYear => "Within a year",
        }
    }
}

/// The respondent's current housing situation, used both to branch the
/// interview and by the situation bonus rule group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HousingSituation {
    CurrentlyUnhoused,
    AtRiskOfLosingHousing,
    StayingWithFriendsOrFamily,
}

impl HousingSituation {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::CurrentlyUnhoused,
            2 => Self::AtRiskOfLosingHousing,
            _ => Self::StayingWithFriendsOrFamily,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CurrentlyUnhoused => "Currently unhoused",
            Self::AtRiskOfLosingHousing => "At risk of losing housing",
            Self::StayingWithFriendsOrFamily => "Staying with friends or family",
        }
    }
}

/// Follow-up section answers keyed by the housing situation. Modeling this
/// as a sum type guarantees exactly one extension block is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SituationDetails {
    Unhoused {
        description: String,
        duration: UnhousedDuration,
        slept_last_night: SleepLocation,
        has_case_manager: bool,
    },
    AtRisk {
        description: String,
        lease_in_name: bool,
        eviction_notice: bool,
        behind_on_bills: bool,
        wants_to_stay: bool,
        lease_length: LeaseLength,
        storage: StorageNeeds,
    },
    StayingWithFamily {
        description: String,
        stay_length: StayLength,
        contributes: bool,
        has_permanent_plan: bool,
        on_lease: bool,
    },
}

impl SituationDetails {
    pub fn kind(&self) -> HousingSituation {
        match self {
            Self::Unhoused { .. } => HousingSituation::CurrentlyUnhoused,
            Self::AtRisk { .. } => HousingSituation::AtRiskOfLosingHousing,
            Self::StayingWithFamily { .. } => HousingSituation::StayingWithFriendsOrFamily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnhousedDuration {
    UnderAYear,
    OverAYear,
    OverFiveYears,
}

impl UnhousedDuration {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::UnderAYear,
            2 => Self::OverAYear,
            _ => Self::OverFiveYears,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderAYear => "Under a year",
            Self::OverAYear => "Over a year",
            Self::OverFiveYears => "Over 5 years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepLocation {
    Shelter,
    Outside,
    Vehicle,
    Motel,
}

impl SleepLocation {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::Shelter,
            2 => Self::Outside,
            3 => Self::Vehicle,
            _ => Self::Motel,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Shelter => "Shelter",
            Self::Outside => "Outside",
            Self::Vehicle => "Vehicle",
            Self::Motel => "Motel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseLength {
    OverSixMonths,
    OverAYear,
    Either,
}

impl LeaseLength {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::OverSixMonths,
            2 => Self::OverAYear,
            _ => Self::Either,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OverSixMonths => "Over six months",
            Self::OverAYear => "Over a year",
            Self::Either => "Either",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageNeeds {
    ManyItems,
    FewItems,
    NoItems,
}

impl StorageNeeds {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::ManyItems,
            2 => Self::FewItems,
            _ => Self::NoItems,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ManyItems => "Yes, a lot of items",
            Self::FewItems => "Only a few items",
            Self::NoItems => "No items",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayLength {
    OneToThreeWeeks,
    TwoToFiveMonths,
    YearOrLonger,
}

impl StayLength {
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Self::OneToThreeWeeks,
            2 => Self::TwoToFiveMonths,
            _ => Self::YearOrLonger,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneToThreeWeeks => "1-3 weeks",
            Self::TwoToFiveMonths => "2-5 months",
            Self::YearOrLonger => "1 year or longer",
        }
    }
}
