// src/config/content.rs
//! Static placeholder copy shown by the tab views.

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

pub const MAIN_TITLE: &str = "AAL Sales Analytics Dashboard";
pub const FOOTER: &str = "AAL Sales Analytics Dashboard | Built with egui | © 2024";

pub const HOME_METRICS: [Metric; 4] = [
    Metric { label: "Total Revenue", value: "$X.XX M", delta: "XX% vs Q3" },
    Metric { label: "Total Transactions", value: "X,XXX", delta: "XXX transactions" },
    Metric { label: "Avg Transaction", value: "$XXX", delta: "$XX increase" },
    Metric { label: "States Analyzed", value: "X", delta: "All major markets" },
];

pub const KEY_FINDINGS: [&str; 4] = [
    "🏆 [State Name] leads with $X.XX million in revenue",
    "👥 [Group Name] shows strongest demographic performance",
    "⏰ [Time Period] identified as peak sales window",
    "🎯 XX% revenue growth opportunity identified",
];

pub const RECOMMENDATIONS: [(&str, &str); 4] = [
    ("Immediate Expansion", "in top-performing states"),
    ("Targeted Programs", "for underperforming demographics"),
    ("Operational Optimization", "based on time patterns"),
    ("Investment Priority", "allocation for maximum ROI"),
];

pub const QUICK_STATS: [(&str, &str); 3] = [
    ("Peak Performance Day", "[Day Name]"),
    ("Best Customer Segment", "[Group Name]"),
    ("Growth Opportunity", "$X.XX M"),
];

pub const QUICK_STATS_WARNING: &str = "Action Required: Underperforming states need attention";

pub const ANALYTICS_NOTICE: &str = "🚧 Analytics content will be added here. This section will include:";

pub const PERFORMANCE_ANALYSIS: [&str; 4] = [
    "State-wise revenue breakdown",
    "Demographic group performance",
    "Time-based sales patterns",
    "Trend analysis & forecasting",
];

pub const INTERACTIVE_FEATURES: [&str; 4] = [
    "Filterable data tables",
    "Dynamic chart selection",
    "Date range pickers",
    "Export capabilities",
];

pub const ANALYTICS_SECTIONS: [&str; 3] = [
    "🏢 State Performance Analysis",
    "👥 Demographic Analysis",
    "⏰ Time-based Analysis",
];

pub const TECHNICAL_SPECS: [(&str, &[&str]); 3] = [
    (
        "Data Sources",
        &["AusApparalSales4thQrt2020.csv", "7,560 transactions", "6 variables analyzed"],
    ),
    (
        "Analysis Tools",
        &["Rust", "egui / eframe", "csv", "Built-in PDF export"],
    ),
    (
        "Report Features",
        &["Interactive visualizations", "PDF export capability", "Real-time data filtering", "Multi-format file support"],
    ),
];
