//! Report assembly.
//!
//! Runs every metric of the EDA report against one table. A metric that
//! fails becomes a section explaining why, and the next metric still runs.

use serde::Serialize;
use survey_analysis::{
    box_summary, cross_tabulation, distribution, grouped_mean, numeric_histogram,
    pearson_correlation, pivot_mean, proportion_by_group, scatter_series, summarize_text_columns,
};
use survey_model::{
    AggregationResult, AnalysisError, AnalysisOptions, CategoricalColumn, NumericColumn,
    SurveyTable, TablePreview, TextColumn, TextSummary, WordFrequencyModel,
};
use tracing::{info, info_span, warn};

use crate::chart::{ChartKind, ChartSpec};
use crate::findings::KEY_FINDINGS;
use crate::wordfreq::word_frequencies;

/// Body of one report section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionBody {
    Ready(AggregationResult),
    /// A required column is absent.
    Skipped { reason: String },
    /// The column has no usable values.
    NoData { column: &'static str },
    /// The statistic is mathematically undefined.
    NotAvailable { reason: String },
}

impl SectionBody {
    pub fn result(&self) -> Option<&AggregationResult> {
        match self {
            SectionBody::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SectionBody::Ready(_))
    }
}

impl From<AnalysisError> for SectionBody {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingColumn { .. } => SectionBody::Skipped {
                reason: err.to_string(),
            },
            AnalysisError::EmptyData { column } => SectionBody::NoData { column },
            AnalysisError::UndefinedStatistic { .. } => SectionBody::NotAvailable {
                reason: err.to_string(),
            },
        }
    }
}

/// One visualization of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    /// Present only when the result was computed.
    pub chart: Option<ChartSpec>,
    pub body: SectionBody,
}

/// Word-cloud view of one open-ended question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudSection {
    pub column: TextColumn,
    pub title: &'static str,
    pub chart: ChartSpec,
    /// `None` when the question has no text to show.
    pub model: Option<WordFrequencyModel>,
    pub responses: usize,
}

impl WordCloudSection {
    pub fn is_no_data(&self) -> bool {
        self.model.is_none()
    }
}

/// The complete EDA report for one uploaded table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: usize,
    pub columns: usize,
    pub missing_columns: Vec<&'static str>,
    pub preview: TablePreview,
    pub sections: Vec<Section>,
    pub word_clouds: Vec<WordCloudSection>,
    pub findings: Vec<&'static str>,
}

impl Report {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Number of sections that could not be computed.
    pub fn unavailable_count(&self) -> usize {
        self.sections.iter().filter(|s| !s.body.is_ready()).count()
    }
}

fn section<T>(
    id: &'static str,
    title: &'static str,
    kind: ChartKind,
    outcome: survey_model::Result<T>,
) -> Section
where
    T: Into<AggregationResult>,
{
    match outcome {
        Ok(result) => {
            let result = result.into();
            let excluded = result.excluded();
            if excluded > 0 {
                info!(section = id, excluded, "rows excluded for null values");
            }
            Section {
                id,
                title,
                chart: Some(ChartSpec::for_result(kind, &result)),
                body: SectionBody::Ready(result),
            }
        }
        Err(err) => {
            warn!(section = id, error = %err, "section not rendered");
            Section {
                id,
                title,
                chart: None,
                body: err.into(),
            }
        }
    }
}

/// Computes every section of the report.
pub fn build_sections(table: &SurveyTable, options: &AnalysisOptions) -> Vec<Section> {
    use CategoricalColumn::{CarOwnership, Education, Employed, Gender, HomeOwner, MaritalStatus};
    use NumericColumn::{Age, HoursWorkedPerWeek, IncomeLevel, LifeSatisfaction};

    let _span = info_span!("aggregation", rows = table.height()).entered();
    let positive = options.positive_label.as_str();
    let ownership = [CarOwnership, HomeOwner];

    vec![
        section(
            "age_distribution",
            "Age Distribution",
            ChartKind::Histogram,
            numeric_histogram(table, Age, options.histogram_bins),
        ),
        section(
            "gender_distribution",
            "Gender Distribution",
            ChartKind::Bar,
            distribution(table, Gender),
        ),
        section(
            "education_distribution",
            "Education Level Count",
            ChartKind::Bar,
            distribution(table, Education),
        ),
        section(
            "income_vs_satisfaction",
            "Income vs. Life Satisfaction",
            ChartKind::Scatter,
            scatter_series(table, IncomeLevel, LifeSatisfaction, Some(Education), None),
        ),
        section(
            "income_satisfaction_correlation",
            "Correlation: Income vs. Life Satisfaction",
            ChartKind::Statistic,
            pearson_correlation(table, IncomeLevel, LifeSatisfaction),
        ),
        section(
            "employment_hours_satisfaction",
            "Employment vs. Avg. Hours & Satisfaction",
            ChartKind::GroupedBar,
            grouped_mean(table, Employed, &[HoursWorkedPerWeek, LifeSatisfaction]),
        ),
        section(
            "car_home_ownership",
            "Car vs. Home Ownership",
            ChartKind::Table,
            cross_tabulation(table, CarOwnership, HomeOwner),
        ),
        section(
            "gender_ownership",
            "Gender-wise Car/Home Ownership",
            ChartKind::GroupedBar,
            proportion_by_group(table, Gender, &ownership, positive),
        ),
        section(
            "marital_ownership",
            "Marital Status vs. Car/Home Ownership",
            ChartKind::GroupedBar,
            proportion_by_group(table, MaritalStatus, &ownership, positive),
        ),
        section(
            "rich_and_happy",
            "Age & Gender: Who is Rich and Happy?",
            ChartKind::Scatter,
            scatter_series(table, Age, IncomeLevel, Some(Gender), Some(LifeSatisfaction)),
        ),
        section(
            "education_income",
            "Education vs. Income",
            ChartKind::BoxPlot,
            box_summary(table, Education, IncomeLevel),
        ),
        section(
            "working_hours",
            "Who is Working More Hours?",
            ChartKind::GroupedBar,
            pivot_mean(table, Gender, Education, HoursWorkedPerWeek),
        ),
        section(
            "hours_income_regression",
            "Hours Worked vs. Income",
            ChartKind::Regression,
            scatter_series(table, HoursWorkedPerWeek, IncomeLevel, None, None),
        ),
        section(
            "hours_income_correlation",
            "Correlation: Hours Worked vs. Income",
            ChartKind::Statistic,
            pearson_correlation(table, HoursWorkedPerWeek, IncomeLevel),
        ),
        section(
            "marital_satisfaction",
            "Marital Status vs. Satisfaction",
            ChartKind::BoxPlot,
            box_summary(table, MaritalStatus, LifeSatisfaction),
        ),
        section(
            "marital_income",
            "Income vs. Marital Status",
            ChartKind::BoxPlot,
            box_summary(table, MaritalStatus, IncomeLevel),
        ),
        section(
            "home_owner_age",
            "Home Ownership by Age",
            ChartKind::BoxPlot,
            box_summary(table, HomeOwner, Age),
        ),
    ]
}

/// Builds word clouds for the five open-ended questions.
pub fn build_word_clouds(table: &SurveyTable, options: &AnalysisOptions) -> Vec<WordCloudSection> {
    let _span = info_span!("text_summary").entered();
    summarize_text_columns(table)
        .into_iter()
        .map(|summary| {
            let column = summary.column();
            let (model, responses) = match &summary {
                TextSummary::NoData { .. } => {
                    info!(column = column.name(), "no text data available");
                    (None, 0)
                }
                TextSummary::Corpus(corpus) => (
                    Some(word_frequencies(corpus, options.max_words)),
                    corpus.responses,
                ),
            };
            WordCloudSection {
                column,
                title: column.label(),
                chart: ChartSpec::word_cloud(column.name()),
                model,
                responses,
            }
        })
        .collect()
}

/// Runs the whole analysis pipeline over one table.
pub fn build_report(table: &SurveyTable, options: &AnalysisOptions) -> Report {
    let _span = info_span!("report").entered();
    let sections = build_sections(table, options);
    let word_clouds = build_word_clouds(table, options);
    let report = Report {
        rows: table.height(),
        columns: table.frame().width(),
        missing_columns: table.missing_columns().iter().map(|c| c.name()).collect(),
        preview: table.preview(options.preview_rows),
        sections,
        word_clouds,
        findings: KEY_FINDINGS.to_vec(),
    };
    info!(
        sections = report.sections.len(),
        unavailable = report.unavailable_count(),
        "report built"
    );
    report
}
