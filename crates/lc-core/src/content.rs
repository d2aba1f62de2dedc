//! Static copy and cost constants shown on the comparison page.

use serde::Serialize;

pub const PAGE_TITLE: &str = "Litigation Case Management: Human vs AI Agents";

// ---------------------------------------------------------------------------
// Costs
// ---------------------------------------------------------------------------

pub const HUMAN_COST_PER_CASE: f64 = 3450.0;
pub const AI_COST_PER_CASE: f64 = 0.25;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const COST_SAVINGS_LABEL: &str = "99.99% Savings";

/// `floor((3450 - 0.25) * 365)`, the banner's annual savings figure.
pub fn annual_savings() -> f64 {
    ((HUMAN_COST_PER_CASE - AI_COST_PER_CASE) * DAYS_PER_YEAR).floor()
}

// ---------------------------------------------------------------------------
// Side panels
// ---------------------------------------------------------------------------

/// Which side of the comparison a piece of content belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Human,
    Ai,
}

/// Fixed figures for one of the two process panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelFacts {
    pub side: Side,
    pub title: &'static str,
    pub processing_time: &'static str,
    pub error_rate: &'static str,
    pub documents_per_hour: &'static str,
}

pub const HUMAN_PANEL: PanelFacts = PanelFacts {
    side: Side::Human,
    title: "Traditional Process",
    processing_time: "3 Days",
    error_rate: "8-12%",
    documents_per_hour: "~30",
};

pub const AI_PANEL: PanelFacts = PanelFacts {
    side: Side::Ai,
    title: "AI Agent Process",
    processing_time: "30 Seconds",
    error_rate: "< 0.1%",
    documents_per_hour: "~36,000",
};

/// Staff members pictured under "Resources Required" on the human panel.
pub const HUMAN_STAFF: usize = 4;

/// Nodes in the AI panel's network ring.
pub const NETWORK_NODES: usize = 6;

// ---------------------------------------------------------------------------
// Process complexity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDescription {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HUMAN_PROCESS: [StepDescription; 4] = [
    StepDescription {
        title: "Manual Document Review",
        description: "Individual document analysis by legal staff",
    },
    StepDescription {
        title: "Legal Research",
        description: "Manual search through case law and precedents",
    },
    StepDescription {
        title: "Case Analysis",
        description: "Individual case evaluation and strategy development",
    },
    StepDescription {
        title: "Document Preparation",
        description: "Manual document drafting and review",
    },
];

pub const AI_PROCESS: [StepDescription; 4] = [
    StepDescription {
        title: "Automated Document Processing",
        description: "Parallel processing of multiple documents",
    },
    StepDescription {
        title: "Neural Network Analysis",
        description: "AI-powered legal precedent matching",
    },
    StepDescription {
        title: "Deep Learning Analysis",
        description: "Pattern recognition and case evaluation",
    },
    StepDescription {
        title: "Automated Generation",
        description: "AI-driven document creation and validation",
    },
];

pub const CAPABILITIES: [StepDescription; 3] = [
    StepDescription {
        title: "Parallel Processing",
        description: "Multiple cases simultaneously",
    },
    StepDescription {
        title: "Smart Filtering",
        description: "Automated relevance detection",
    },
    StepDescription {
        title: "24/7 Operation",
        description: "Continuous processing",
    },
];

// ---------------------------------------------------------------------------
// ROI summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoiCallout {
    pub headline: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const ROI_CALLOUTS: [RoiCallout; 3] = [
    RoiCallout {
        headline: "99.99% Faster",
        label: "Processing Speed",
        detail: "3 Days → 30 Seconds",
    },
    RoiCallout {
        headline: "99.99% Cost Reduction",
        label: "Operational Costs",
        detail: "$3,450.00 → $0.25",
    },
    RoiCallout {
        headline: "99.9% Accuracy",
        label: "Error Reduction",
        detail: "< 0.1% vs 8-12% error rate",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_number, format_usd};

    #[test]
    fn annual_savings_figure() {
        assert_eq!(annual_savings(), 1_259_158.0);
        assert_eq!(format_number(annual_savings()), "1,259,158");
    }

    #[test]
    fn cost_figures_render() {
        assert_eq!(format_usd(HUMAN_COST_PER_CASE), "$3,450.00");
        assert_eq!(format_usd(AI_COST_PER_CASE), "$0.25");
    }

    #[test]
    fn process_lists_pair_up() {
        assert_eq!(HUMAN_PROCESS.len(), AI_PROCESS.len());
        assert_eq!(HUMAN_PROCESS.len(), crate::steps::STEP_COUNT);
    }
}
