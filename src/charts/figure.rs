//! Chart specification model.
//!
//! Serializes to the plotly figure JSON shape (`data` + `layout`) so the web
//! page can hand it straight to `Plotly.react`.

use serde::{Deserialize, Serialize};

/// The month axis always spans 1..=12 with half a unit of margin.
pub const MONTH_AXIS_RANGE: [f64; 2] = [0.5, 12.5];

const KOREAN_MONTHS: [&str; 12] = [
    "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Locale of the month tick labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    #[default]
    Korean,
    English,
}

impl MonthLabels {
    pub fn labels(self) -> [&'static str; 12] {
        match self {
            MonthLabels::Korean => KOREAN_MONTHS,
            MonthLabels::English => ENGLISH_MONTHS,
        }
    }

    /// Label for a 1-based month, `None` outside 1..=12.
    pub fn label(self, month: i32) -> Option<&'static str> {
        usize::try_from(month - 1)
            .ok()
            .and_then(|idx| self.labels().get(idx).copied())
    }
}

/// One line-and-marker series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

impl Trace {
    /// `points` must already be ordered by month.
    pub fn lines_markers(name: impl Into<String>, points: &[(i32, f64)]) -> Self {
        Self {
            kind: "scatter".to_string(),
            mode: "lines+markers".to_string(),
            name: name.into(),
            x: points.iter().map(|(m, _)| *m).collect(),
            y: points.iter().map(|(_, v)| *v).collect(),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub tickvals: Vec<i32>,
    pub ticktext: Vec<String>,
}

impl Axis {
    pub fn months(labels: MonthLabels) -> Self {
        Self {
            range: MONTH_AXIS_RANGE,
            tickvals: (1..=12).collect(),
            ticktext: labels.labels().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub xaxis: Axis,
}

/// Complete chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Empty figure on the month axis.
    pub fn monthly(labels: MonthLabels) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout {
                xaxis: Axis::months(labels),
            },
        }
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.data.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn month_labels_by_locale() {
        assert_eq!(MonthLabels::Korean.label(1), Some("1월"));
        assert_eq!(MonthLabels::Korean.label(12), Some("12월"));
        assert_eq!(MonthLabels::English.label(3), Some("Mar"));
        assert_eq!(MonthLabels::English.label(0), None);
        assert_eq!(MonthLabels::English.label(13), None);
    }

    #[test]
    fn serializes_plotly_shape() {
        let mut fig = Figure::monthly(MonthLabels::English);
        fig.add_trace(Trace::lines_markers("2021", &[(1, 10.0), (2, 20.5)]));

        let value = serde_json::to_value(&fig).unwrap();
        assert_eq!(
            value["data"][0],
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": "2021",
                "x": [1, 2],
                "y": [10.0, 20.5],
            })
        );
        assert_eq!(value["layout"]["xaxis"]["range"], json!([0.5, 12.5]));
        assert_eq!(value["layout"]["xaxis"]["tickvals"], json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
        assert_eq!(value["layout"]["xaxis"]["ticktext"][11], json!("Dec"));
    }
}
