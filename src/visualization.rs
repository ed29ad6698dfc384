use crate::metrics::ProcessStats;
use crate::simulation::{PolicyRun, SimulationReport};
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Renders charts for every successful policy in a report
pub struct ScheduleCharts<'a> {
    report: &'a SimulationReport,
}

impl<'a> ScheduleCharts<'a> {
    pub fn new(report: &'a SimulationReport) -> Self {
        Self { report }
    }

    /// Write a completion-time bar chart and a timeline per policy.
    /// Returns the paths written.
    pub fn generate_plots(&self, output_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        std::fs::create_dir_all(output_dir)?;

        let mut written = Vec::new();
        for (i, outcome) in self.report.outcomes.iter().enumerate() {
            let Ok(run) = &outcome.result else {
                continue;
            };
            let title = outcome.policy.to_string();
            let stem = format!("{}_{}", i + 1, outcome.policy.name().to_lowercase());

            let completion = output_dir.join(format!("{}_completion.png", stem));
            self.plot_completion_times(&title, &run.summary.processes, &completion)?;
            written.push(completion);

            let timeline = output_dir.join(format!("{}_timeline.png", stem));
            self.plot_timeline(&title, run, &timeline)?;
            written.push(timeline);
        }

        Ok(written)
    }

    /// One bar per process, height = completion time
    fn plot_completion_times(
        &self,
        title: &str,
        stats: &[ProcessStats],
        path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
        root.fill(&WHITE)?;

        let max_time = stats
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(1)
            .max(1);

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{}: Completion Time", title), ("sans-serif", 40))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((0..stats.len()).into_segmented(), 0u64..max_time + 1)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Process")
            .y_desc("Completion Time")
            .x_label_formatter(&|v| process_label(stats, v))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(10)
                .data(stats.iter().enumerate().map(|(i, p)| (i, p.completion_time))),
        )?;

        root.present()?;
        Ok(())
    }

    /// Gantt-style view: one row per process, one bar per entry
    fn plot_timeline(&self, title: &str, run: &PolicyRun, path: &Path) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
        root.fill(&WHITE)?;

        let stats = &run.summary.processes;
        let makespan = run.summary.makespan.max(1);

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{}: Timeline", title), ("sans-serif", 40))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0u64..makespan, (0..stats.len()).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Time")
            .y_desc("Process")
            .y_label_formatter(&|v| process_label(stats, v))
            .draw()?;

        chart.draw_series(run.entries.iter().filter_map(|entry| {
            let row = stats.iter().position(|p| p.id == entry.id)?;
            Some(Rectangle::new(
                [
                    (entry.start_time, SegmentValue::Exact(row)),
                    (entry.finish_time, SegmentValue::Exact(row + 1)),
                ],
                Palette99::pick(row).filled(),
            ))
        }))?;

        root.present()?;
        Ok(())
    }
}

fn process_label(stats: &[ProcessStats], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => stats
            .get(*i)
            .map(|p| format!("P{}", p.id))
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}
