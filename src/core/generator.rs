use crate::domain::model::{Draw, Sum, DRAW_UPPER_BOUND, RESULT_LABEL};
use crate::domain::ports::{RandomSource, SumSink};
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// stdout 結果行的前綴
    pub label: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            label: RESULT_LABEL.to_string(),
        }
    }
}

/// 抽兩個亂數、相加、輸出到 stdout 與檔案，並回傳結果
pub struct SumGenerator<R: RandomSource, S: SumSink> {
    source: R,
    sink: S,
    settings: GeneratorSettings,
}

impl<R: RandomSource, S: SumSink> SumGenerator<R, S> {
    pub fn new(source: R, sink: S) -> Self {
        Self::with_settings(source, sink, GeneratorSettings::default())
    }

    pub fn with_settings(source: R, sink: S, settings: GeneratorSettings) -> Self {
        Self {
            source,
            sink,
            settings,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// 從同一個來源依序抽取 a、b
    pub fn draw(&mut self) -> Draw {
        let a = self.source.draw(DRAW_UPPER_BOUND);
        let b = self.source.draw(DRAW_UPPER_BOUND);
        Draw { a, b }
    }

    pub fn compute_and_emit(&mut self) -> Sum {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.compute_and_emit_to(&mut out)
    }

    /// 兩個輸出管道的失敗都不會回報給呼叫端，只記錄日誌
    pub fn compute_and_emit_to<W: Write>(&mut self, out: &mut W) -> Sum {
        let draw = self.draw();
        let sum = draw.sum();
        tracing::debug!("🎲 Drew a={} b={} -> sum={}", draw.a, draw.b, sum);

        if let Err(e) = writeln!(out, "{}{}", self.settings.label, sum).and_then(|_| out.flush()) {
            tracing::warn!("⚠️ Failed to write result line: {}", e);
        }

        match self.sink.write_sum(sum) {
            Ok(()) => tracing::debug!("📁 Result written"),
            Err(e) => tracing::debug!("Skipping result file: {}", e),
        }

        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FileSink, SeededSource};
    use crate::utils::error::{RandsumError, Result};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct ScriptedSource(VecDeque<u32>);

    impl RandomSource for ScriptedSource {
        fn draw(&mut self, upper: u32) -> u32 {
            self.0.pop_front().unwrap().min(upper)
        }
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<Sum>>);

    impl SumSink for RecordingSink {
        fn write_sum(&self, sum: Sum) -> Result<()> {
            self.0.lock().unwrap().push(sum);
            Ok(())
        }
    }

    struct FailingSink;

    impl SumSink for FailingSink {
        fn write_sum(&self, _sum: Sum) -> Result<()> {
            Err(RandsumError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_draws_are_sequential() {
        let source = ScriptedSource(VecDeque::from(vec![120, 300]));
        let mut generator = SumGenerator::new(source, RecordingSink::default());

        let mut out = Vec::new();
        let sum = generator.compute_and_emit_to(&mut out);

        assert_eq!(sum.value(), 420);
        assert_eq!(String::from_utf8(out).unwrap(), "Result: 420\n");
        assert_eq!(*generator.sink().0.lock().unwrap(), vec![sum]);
    }

    #[test]
    fn test_result_line_parses_back_to_sum() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::new(temp_dir.path().join("gui.txt"));
        let mut generator = SumGenerator::new(SeededSource::from_seed_u64(99), sink);

        for _ in 0..50 {
            let mut out = Vec::new();
            let sum = generator.compute_and_emit_to(&mut out);
            let line = String::from_utf8(out).unwrap();

            let printed: u32 = line
                .strip_prefix(RESULT_LABEL)
                .unwrap()
                .trim_end()
                .parse()
                .unwrap();
            assert_eq!(printed, sum.value());
            assert!(Sum::is_in_range(sum.value()));

            let written = std::fs::read_to_string(generator.sink().path()).unwrap();
            assert_eq!(written, sum.to_string());
        }
    }

    #[test]
    fn test_sink_failure_is_absorbed() {
        let mut generator = SumGenerator::new(SeededSource::from_seed_u64(3), FailingSink);
        let mut expected = SeededSource::from_seed_u64(3);
        let a = expected.draw(DRAW_UPPER_BOUND);
        let b = expected.draw(DRAW_UPPER_BOUND);

        let mut out = Vec::new();
        let sum = generator.compute_and_emit_to(&mut out);
        assert_eq!(sum.value(), a + b);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_custom_label() {
        let settings = GeneratorSettings {
            label: "sum=".to_string(),
        };
        let source = ScriptedSource(VecDeque::from(vec![1, 2]));
        let mut generator =
            SumGenerator::with_settings(source, RecordingSink::default(), settings);

        let mut out = Vec::new();
        generator.compute_and_emit_to(&mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "sum=3\n");
    }

    #[test]
    fn test_same_seed_same_sums() {
        let mut first = SumGenerator::new(SeededSource::from_seed_u64(2024), RecordingSink::default());
        let mut second = SumGenerator::new(SeededSource::from_seed_u64(2024), RecordingSink::default());

        let a: Vec<Draw> = (0..10).map(|_| first.draw()).collect();
        let b: Vec<Draw> = (0..10).map(|_| second.draw()).collect();
        assert_eq!(a, b);
    }
}
