//! LaTeX table rendering.
//!
//! Produces the two `longtable` artifacts: the realizable-benchmarks table
//! (with a class column, one `\hline` per class group) and the
//! unrealizable-benchmarks table (same shape, no class column). Rows come
//! from the display registry in registry order: registered benchmarks with no
//! data render as `?` placeholders, and data for unregistered benchmarks is
//! omitted.
//!
//! Cell formatting rules are fixed for compatibility with the paper sources:
//! timeout sentinels render as `-`, the bounded-checking flag renders as
//! `y`/`n`, rounds render from the structured form, and the better time is
//! bolded using numeric comparison with sentinels treated as infinitely slow.

use crate::aggregate::Aggregation;
use crate::classify::Classifier;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::record::BenchmarkRow;
use crate::registry::{DisplayRegistry, RegistryEntry};
use crate::rounds::RoundsField;
use std::fs;
use std::path::Path;

/// LaTeX label attached to the realizable table.
pub const REALIZABLE_LABEL: &str = "table:experiments";

/// LaTeX label attached to the unrealizable table.
pub const UNREALIZABLE_LABEL: &str = "table:unrealizable-experiments";

// Caption texts are byte-for-byte the ones in the published paper sources,
// double spaces included.
fn caption_realizable(setup: &str) -> String {
    format!(
        "Experimental Results for Realizable Benchmarks.  Benchmarks are grouped by categories \
         introduced in Section \\ref{{sec:evaluation}}. All times are in seconds. The best time \
         is highlighted in bold font.  A '-' indicates timeout ($>$ 10 min). The ``B'' column \
         indicates if using bounded checking was used to classify a counterexample or validate \
         a lemma. Steps is a sequence of '$\\bullet$' (refinement) and '$\\circ$' (coarsening). \
         Experiments are run on {setup}."
    )
}

fn caption_unrealizable(setup: &str) -> String {
    format!(
        "Experimental Results for Unrealizable Benchmarks. All synthesis times are in seconds. \
         The best time is highlighted in bold font.  A '-' indicates timeout ($>$ 10 min). The \
         ``B'' column indicates if using bounded checking was used to classify a counterexample \
         or validate a lemma. Steps is a sequence of '$\\bullet$' (refinement) and '$\\circ$' \
         (coarsening). Experiments are run on {setup}."
    )
}

/// Renderer for both table variants.
pub struct TableRenderer<'a> {
    classifier: Classifier,
    registry: &'a DisplayRegistry,
}

impl<'a> TableRenderer<'a> {
    /// Build a renderer over an immutable registry.
    pub fn new(config: &ReportConfig, registry: &'a DisplayRegistry) -> Self {
        Self {
            classifier: Classifier::new(config),
            registry,
        }
    }

    /// Sentinel-aware time cell: timeouts render as a dash.
    fn timefix(&self, time: &str) -> String {
        if self.classifier.is_timeout(time) {
            "-".to_string()
        } else {
            time.to_string()
        }
    }

    /// Time cells for one row, with the better time bolded.
    ///
    /// Numeric comparison with sentinels mapped to the timeout value: any
    /// finite time beats a timeout, and two timeouts bold neither side.
    fn time_cells(&self, row: &BenchmarkRow) -> (String, String) {
        let cand_timeout = self.classifier.is_timeout(&row.candidate.time);
        let base_timeout = self.classifier.is_timeout(&row.baseline.time);
        let a = self.classifier.time_secs(&row.candidate.time);
        let b = self.classifier.time_secs(&row.baseline.time);

        let mut time1 = self.timefix(&row.candidate.time);
        let mut time2 = self.timefix(&row.baseline.time);

        if !cand_timeout && (base_timeout || b > a) {
            time1 = format!("{{\\bf{}}}", row.candidate.time);
        } else if !base_timeout {
            time2 = format!("{{\\bf{}}}", row.baseline.time);
        }

        (time1, time2)
    }

    fn data_row(&self, entry: &RegistryEntry, row: &BenchmarkRow, with_class: bool) -> String {
        let bounding = if row.candidate.b == "✓" { "y" } else { "n" };
        let rounds = format!("${}$", RoundsField::parse(&row.candidate.rounds).latex());
        let rounds2 = RoundsField::parse(&row.baseline.rounds).count();
        let (time1, time2) = self.time_cells(row);

        if with_class {
            format!(
                "\t\t\t{} & {} & {} & {} & {} & {}  & {}  \\\\\n",
                entry.class_label, entry.name, bounding, time1, rounds, time2, rounds2
            )
        } else {
            format!(
                "\t\t\t{} & {} & {} & {} & {}  & {}  \\\\\n",
                entry.name, bounding, time1, rounds, time2, rounds2
            )
        }
    }

    fn placeholder_row(entry: &RegistryEntry, with_class: bool) -> String {
        if with_class {
            format!(
                "\t\t\t{}&{}& ? & ?   & ?  & ?  & ?  \\\\ %chktex 26\n",
                entry.class_label, entry.name
            )
        } else {
            format!(
                "\t\t\t{}& ? & ?   & ?  & ?  & ?  \\\\ %chktex 26\n",
                entry.name
            )
        }
    }

    fn header(out: &mut String) {
        out.push_str("% ====================================\n");
        out.push_str(&format!(
            "% This table has been automatically produced by the tool on {}.\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str("% ====================================\n");
    }

    /// Render the realizable-benchmarks table.
    pub fn render_realizable(&self, agg: &Aggregation) -> String {
        let mut out = String::new();
        Self::header(&mut out);
        out.push_str("\t{\n");
        out.push_str("\t\t\\begin{longtable}[h]{|c|c|c|c|c||c|c|}\n");
        out.push_str("\t\t\t\\hline\n");
        out.push_str(
            "\t\t\t\\multirow{2}{*}{Class} & \\multirow{2}{*}{Benchmark} & \
             \\multirow{2}{*}{B?} & \\multicolumn{2}{c||}{\\tool} & \
             \\multicolumn{2}{c|}{Baseline}\\\\\n",
        );
        out.push_str("\t\t\t\\cline{4-7}\n");
        out.push_str("\t\t\t &   & & time & steps & time & \\#'r' \\\\\n");

        for group in &self.registry.realizable {
            out.push_str("\t\t\t\\hline\n");
            for entry in &group.entries {
                let id = group.benchmark_id(entry);
                match agg.table.get(&id) {
                    Some(row) => out.push_str(&self.data_row(entry, row, true)),
                    None => out.push_str(&Self::placeholder_row(entry, true)),
                }
            }
        }

        out.push_str("\t\t\t\\hline\n");
        out.push_str(&format!(
            "\t\\caption{{{}}}\\label{{{}}}\n",
            caption_realizable(&agg.setup),
            REALIZABLE_LABEL
        ));
        out.push_str("\t\t\\end{longtable}\n");
        out.push_str("\t}\n");
        out
    }

    /// Render the unrealizable-benchmarks table (no class column).
    pub fn render_unrealizable(&self, agg: &Aggregation) -> String {
        let mut out = String::new();
        Self::header(&mut out);
        out.push_str("\t{\n");
        out.push_str("\t\t\\begin{longtable}[h]{|c|c|c|c||c|c|}\n");
        out.push_str("\t\t\t\\hline\n");
        out.push_str(
            "\t\t\t\\multirow{2}{*}{Benchmark} & \\multirow{2}{*}{B?} & \
             \\multicolumn{2}{c||}{\\tool} & \\multicolumn{2}{c|}{Baseline}\\\\\n",
        );
        out.push_str("\t\t\t\\cline{3-6}\n");
        out.push_str("\t\t\t & & time & steps & time & \\#'r' \\\\\n");

        for group in &self.registry.unrealizable {
            out.push_str("\t\t\t\\hline\n");
            for entry in &group.entries {
                let id = group.benchmark_id(entry);
                match agg.table.get(&id) {
                    Some(row) => out.push_str(&self.data_row(entry, row, false)),
                    None => out.push_str(&Self::placeholder_row(entry, false)),
                }
            }
        }

        out.push_str("\t\t\t\\hline\n");
        out.push_str(&format!(
            "\t\\caption{{{}}}\\label{{{}}}\n",
            caption_unrealizable(&agg.setup),
            UNREALIZABLE_LABEL
        ));
        out.push_str("\t\t\\end{longtable}\n");
        out.push_str("\t}\n");
        out
    }

    /// Write the realizable table to `path`.
    pub fn write_realizable<P: AsRef<Path>>(&self, agg: &Aggregation, path: P) -> Result<()> {
        fs::write(path, self.render_realizable(agg))?;
        Ok(())
    }

    /// Write the unrealizable table to `path`.
    pub fn write_unrealizable<P: AsRef<Path>>(&self, agg: &Aggregation, path: P) -> Result<()> {
        fs::write(path, self.render_unrealizable(agg))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregator;
    use crate::record::{parse_line, LineOutcome};
    use crate::registry::RegistryGroup;

    fn registry() -> DisplayRegistry {
        DisplayRegistry {
            realizable: vec![RegistryGroup {
                key: "tree".to_string(),
                entries: vec![RegistryEntry {
                    file: "sumtree".to_string(),
                    class_label: "Tree".to_string(),
                    name: "sum".to_string(),
                }],
            }],
            unrealizable: vec![RegistryGroup {
                key: "unrealizable".to_string(),
                entries: vec![RegistryEntry {
                    file: "minhom".to_string(),
                    class_label: "List".to_string(),
                    name: "min".to_string(),
                }],
            }],
        }
    }

    fn aggregation(lines: &[&str]) -> Aggregation {
        let config = ReportConfig::default();
        let mut aggregator = Aggregator::new(&config);
        for line in lines {
            if let LineOutcome::Row(row) = parse_line(line) {
                aggregator.ingest(*row);
            }
        }
        aggregator.finish()
    }

    #[test]
    fn test_candidate_bolded_when_faster() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let agg = aggregation(&["tree/sumtree.pmrs,a,0.12,d,+.+!,3,✓,ok,b,1.50,d,+++!,4,n,ok"]);

        let tex = renderer.render_realizable(&agg);
        // No space between the command and the digits, as in the paper sources.
        assert!(tex.contains("{\\bf0.12}"));
        assert!(!tex.contains("{\\bf1.50}"));
        // Bounded checking flag renders as y.
        assert!(tex.contains("Tree & sum & y"));
        // Rounds render from the structured form.
        assert!(tex.contains("$\\bullet\\circ\\bullet$"));
    }

    #[test]
    fn test_baseline_bolded_when_candidate_times_out() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let agg = aggregation(&["tree/sumtree.pmrs,a,timeout,d,+!,3,n,ok,b,1.50,d,++!,4,n,ok"]);

        let tex = renderer.render_realizable(&agg);
        assert!(tex.contains("{\\bf1.50}"));
        // The candidate's timeout renders as a dash.
        assert!(tex.contains("& - &"));
    }

    #[test]
    fn test_double_timeout_bolds_neither() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let agg = aggregation(&["tree/sumtree.pmrs,a,timeout,d,+!,3,n,ok,b,TIMEOUT,d,++!,4,n,ok"]);

        let tex = renderer.render_realizable(&agg);
        assert!(!tex.contains("\\bf"));
    }

    #[test]
    fn test_missing_data_renders_placeholders() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let agg = aggregation(&[]);

        let tex = renderer.render_realizable(&agg);
        assert!(tex.contains("Tree&sum& ? & ?   & ?  & ?  & ?  \\\\ %chktex 26"));

        let tex = renderer.render_unrealizable(&agg);
        assert!(tex.contains("min& ? & ?   & ?  & ?  & ?  \\\\ %chktex 26"));
    }

    #[test]
    fn test_unregistered_benchmark_omitted() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let agg = aggregation(&["tree/unknown.pmrs,a,0.5,d,+!,3,n,ok,b,1.5,d,++!,4,n,ok"]);

        let tex = renderer.render_realizable(&agg);
        assert!(!tex.contains("unknown"));
    }

    #[test]
    fn test_rendering_is_stable_modulo_timestamp() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let agg = aggregation(&["tree/sumtree.pmrs,a,0.12,d,+.+!,3,✓,ok,b,1.50,d,+++!,4,n,ok"]);

        let strip = |s: String| -> Vec<String> {
            s.lines()
                .filter(|l| !l.contains("automatically produced"))
                .map(str::to_string)
                .collect()
        };

        let first = strip(renderer.render_realizable(&agg));
        let second = strip(renderer.render_realizable(&agg));
        assert_eq!(first, second);
    }

    #[test]
    fn test_captions_and_labels() {
        let registry = registry();
        let renderer = TableRenderer::new(&ReportConfig::default(), &registry);
        let mut agg = aggregation(&[]);
        agg.setup = "a test machine".to_string();

        let tex = renderer.render_realizable(&agg);
        assert!(tex.contains("\\label{table:experiments}"));
        assert!(tex.contains("Experiments are run on a test machine."));
        // Caption bytes match the paper sources, double spacing included.
        assert!(tex.contains("Realizable Benchmarks.  Benchmarks are grouped"));
        assert!(tex.contains("bold font.  A '-' indicates timeout"));
        assert!(tex.contains("indicates if using bounded checking was used"));

        let tex = renderer.render_unrealizable(&agg);
        assert!(tex.contains("\\label{table:unrealizable-experiments}"));
    }
}
