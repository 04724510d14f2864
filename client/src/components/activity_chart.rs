//! Seven-day claim activity bar chart on the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::{ACTIVITY_DAYS, bar_height_percent};

/// Bars for `series`, oldest day on the left.
#[component]
pub fn ActivityChart(series: [u32; ACTIVITY_DAYS]) -> impl IntoView {
    view! {
        <div class="activity-chart card">
            <div class="activity-chart__header">
                <h2>"Activity (last 7 days)"</h2>
            </div>
            <div class="activity-chart__bars">
                {series
                    .iter()
                    .map(|value| {
                        let height = bar_height_percent(*value, &series);
                        view! {
                            <div class="activity-chart__bar">
                                <div
                                    class="activity-chart__fill"
                                    style=format!("height: {height}%")
                                    title=format!("{value} claims")
                                ></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="activity-chart__caption">"Claims analyzed per day"</div>
        </div>
    }
}
