//! Type-safe column identifiers for the survey schema.
//!
//! The survey export uses fixed, case-sensitive column names. Each column
//! belongs to exactly one semantic kind, and the three enums below make
//! that kind part of the type so an aggregation cannot ask for the mean
//! of a categorical column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type declared for a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
    FreeText,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::FreeText => "free text",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric survey columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumericColumn {
    Age,
    LifeSatisfaction,
    IncomeLevel,
    HoursWorkedPerWeek,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 4] = [
        NumericColumn::Age,
        NumericColumn::LifeSatisfaction,
        NumericColumn::IncomeLevel,
        NumericColumn::HoursWorkedPerWeek,
    ];

    /// Column name as it appears in the source file.
    pub fn name(&self) -> &'static str {
        match self {
            NumericColumn::Age => "Q1_Age",
            NumericColumn::LifeSatisfaction => "Q4_LifeSatisfaction",
            NumericColumn::IncomeLevel => "Q6_IncomeLevel",
            NumericColumn::HoursWorkedPerWeek => "Q10_HoursWorkedPerWeek",
        }
    }

    /// Human-readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            NumericColumn::Age => "Age",
            NumericColumn::LifeSatisfaction => "Life Satisfaction",
            NumericColumn::IncomeLevel => "Income Level",
            NumericColumn::HoursWorkedPerWeek => "Hours Worked per Week",
        }
    }
}

/// Categorical survey columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoricalColumn {
    Gender,
    Education,
    CarOwnership,
    Employed,
    MaritalStatus,
    HomeOwner,
}

impl CategoricalColumn {
    pub const ALL: [CategoricalColumn; 6] = [
        CategoricalColumn::Gender,
        CategoricalColumn::Education,
        CategoricalColumn::CarOwnership,
        CategoricalColumn::Employed,
        CategoricalColumn::MaritalStatus,
        CategoricalColumn::HomeOwner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CategoricalColumn::Gender => "Q2_Gender",
            CategoricalColumn::Education => "Q3_Education",
            CategoricalColumn::CarOwnership => "Q5_CarOwnership",
            CategoricalColumn::Employed => "Q7_Employed",
            CategoricalColumn::MaritalStatus => "Q8_MaritalStatus",
            CategoricalColumn::HomeOwner => "Q9_HomeOwner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoricalColumn::Gender => "Gender",
            CategoricalColumn::Education => "Education",
            CategoricalColumn::CarOwnership => "Car Ownership",
            CategoricalColumn::Employed => "Employment",
            CategoricalColumn::MaritalStatus => "Marital Status",
            CategoricalColumn::HomeOwner => "Home Ownership",
        }
    }
}

/// Open-ended (free-text) survey columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextColumn {
    Neighborhood,
    FutureConcerns,
    CustomerExperience,
    WorkMotivation,
    AdditionalComments,
}

impl TextColumn {
    pub const ALL: [TextColumn; 5] = [
        TextColumn::Neighborhood,
        TextColumn::FutureConcerns,
        TextColumn::CustomerExperience,
        TextColumn::WorkMotivation,
        TextColumn::AdditionalComments,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TextColumn::Neighborhood => "Q11_OE_Neighborhood",
            TextColumn::FutureConcerns => "Q12_OE_FutureConcerns",
            TextColumn::CustomerExperience => "Q13_OE_CustomerExperience",
            TextColumn::WorkMotivation => "Q14_OE_WorkMotivation",
            TextColumn::AdditionalComments => "Q15_OE_AdditionalComments",
        }
    }

    /// Section title used for the word-frequency view.
    pub fn label(&self) -> &'static str {
        match self {
            TextColumn::Neighborhood => "Neighborhood Likes",
            TextColumn::FutureConcerns => "Future Concerns",
            TextColumn::CustomerExperience => "Customer Experience",
            TextColumn::WorkMotivation => "Work Motivation",
            TextColumn::AdditionalComments => "Additional Comments",
        }
    }
}

/// Any column of the survey schema, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyColumn {
    Numeric(NumericColumn),
    Categorical(CategoricalColumn),
    Text(TextColumn),
}

impl SurveyColumn {
    /// Every schema column, ordered Q1 through Q15.
    pub const ALL: [SurveyColumn; 15] = [
        SurveyColumn::Numeric(NumericColumn::Age),
        SurveyColumn::Categorical(CategoricalColumn::Gender),
        SurveyColumn::Categorical(CategoricalColumn::Education),
        SurveyColumn::Numeric(NumericColumn::LifeSatisfaction),
        SurveyColumn::Categorical(CategoricalColumn::CarOwnership),
        SurveyColumn::Numeric(NumericColumn::IncomeLevel),
        SurveyColumn::Categorical(CategoricalColumn::Employed),
        SurveyColumn::Categorical(CategoricalColumn::MaritalStatus),
        SurveyColumn::Categorical(CategoricalColumn::HomeOwner),
        SurveyColumn::Numeric(NumericColumn::HoursWorkedPerWeek),
        SurveyColumn::Text(TextColumn::Neighborhood),
        SurveyColumn::Text(TextColumn::FutureConcerns),
        SurveyColumn::Text(TextColumn::CustomerExperience),
        SurveyColumn::Text(TextColumn::WorkMotivation),
        SurveyColumn::Text(TextColumn::AdditionalComments),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SurveyColumn::Numeric(column) => column.name(),
            SurveyColumn::Categorical(column) => column.name(),
            SurveyColumn::Text(column) => column.name(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SurveyColumn::Numeric(column) => column.label(),
            SurveyColumn::Categorical(column) => column.label(),
            SurveyColumn::Text(column) => column.label(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            SurveyColumn::Numeric(_) => ColumnKind::Numeric,
            SurveyColumn::Categorical(_) => ColumnKind::Categorical,
            SurveyColumn::Text(_) => ColumnKind::FreeText,
        }
    }

    /// Free-text columns may be absent without affecting other metrics.
    pub fn is_optional(&self) -> bool {
        matches!(self, SurveyColumn::Text(_))
    }
}

impl fmt::Display for SurveyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurveyColumn {
    type Err = String;

    /// Exact, case-sensitive lookup by source column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurveyColumn::ALL
            .iter()
            .copied()
            .find(|column| column.name() == s)
            .ok_or_else(|| format!("unknown survey column: {s}"))
    }
}

impl From<NumericColumn> for SurveyColumn {
    fn from(column: NumericColumn) -> Self {
        SurveyColumn::Numeric(column)
    }
}

impl From<CategoricalColumn> for SurveyColumn {
    fn from(column: CategoricalColumn) -> Self {
        SurveyColumn::Categorical(column)
    }
}

impl From<TextColumn> for SurveyColumn {
    fn from(column: TextColumn) -> Self {
        SurveyColumn::Text(column)
    }
}
