// src/simulation/csv.rs

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Terminator, Trim, Writer, WriterBuilder};
use tracing::{info, warn};

use crate::simulation::error::MalformedRecord;
use crate::simulation::{SimulationError, Trajectory, TrajectoryRecord, TrajectorySink};

/// CSV のヘッダー行
pub const CSV_HEADER: [&str; 3] = ["t", "x", "y"];

/// 小数点以下6桁の固定小数点表記
fn format_field(value: f64) -> String {
    format!("{:.6}", value)
}

/// 軌道を CSV として書き出す書き込み先
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl CsvSink<File> {
    /// ファイルを作成してヘッダーを書き込む
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SimulationError::SinkUnavailable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(inner: W) -> Result<Self, SimulationError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        Ok(CsvSink { writer })
    }

    /// 内部の書き込み先を取り出す（バッファはフラッシュされる）
    pub fn into_inner(self) -> Result<W, SimulationError> {
        self.writer
            .into_inner()
            .map_err(|err| SimulationError::SinkWrite(err.into_error().into()))
    }
}

impl<W: Write> TrajectorySink for CsvSink<W> {
    fn write_record(&mut self, record: &TrajectoryRecord) -> Result<(), SimulationError> {
        self.writer.write_record([
            format_field(record.t),
            format_field(record.x),
            format_field(record.y),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SimulationError> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// CSV から軌道レコードを順に読み出す
///
/// 先頭行はヘッダーとして読み飛ばす。3つの実数として解釈できない
/// レコードに出会った時点で読み込みを終了し、それまでのレコードは有効とする。
pub struct CsvSource<R: Read> {
    reader: Reader<R>,
    record: StringRecord,
    malformed: Option<MalformedRecord>,
    done: bool,
    origin: String, // ログ用の読み出し元名
}

impl CsvSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimulationError::SourceUnavailable {
            path: path.display().to_string(),
            source,
        })?;
        let mut source = Self::from_reader(file);
        source.origin = path.display().to_string();
        Ok(source)
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(inner: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(inner);
        CsvSource {
            reader,
            record: StringRecord::new(),
            malformed: None,
            done: false,
            origin: String::from("<reader>"),
        }
    }

    /// 読み込みを打ち切った不正レコード
    pub fn malformed(&self) -> Option<&MalformedRecord> {
        self.malformed.as_ref()
    }

    /// 不正レコードを記録して読み込みを終了する
    fn stop(&mut self, line: u64, reason: String) -> Option<TrajectoryRecord> {
        let malformed = MalformedRecord { line, reason };
        warn!(source = %self.origin, "stopped reading trajectory: {}", malformed);
        self.done = true;
        self.malformed = Some(malformed);
        None
    }
}

fn parse_record(record: &StringRecord) -> Result<TrajectoryRecord, String> {
    if record.len() != 3 {
        return Err(format!("expected 3 fields, found {}", record.len()));
    }
    let field = |i: usize| {
        record[i]
            .parse::<f64>()
            .map_err(|err| format!("field {} ({:?}): {}", CSV_HEADER[i], &record[i], err))
    };
    Ok(TrajectoryRecord {
        t: field(0)?,
        x: field(1)?,
        y: field(2)?,
    })
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = TrajectoryRecord;

    fn next(&mut self) -> Option<TrajectoryRecord> {
        if self.done {
            return None;
        }
        let line = self.reader.position().line();
        match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                let line = self.record.position().map_or(line, |pos| pos.line());
                match parse_record(&self.record) {
                    Ok(record) => Some(record),
                    Err(reason) => self.stop(line, reason),
                }
            }
            Err(err) => self.stop(line, err.to_string()),
        }
    }
}

/// 軌道全体をファイルへ書き出す
pub fn write_trajectory<P: AsRef<Path>>(
    path: P,
    trajectory: &[TrajectoryRecord],
) -> Result<(), SimulationError> {
    let mut sink = CsvSink::create(&path)?;
    for record in trajectory {
        sink.write_record(record)?;
    }
    sink.finish()?;
    info!(records = trajectory.len(), path = %path.as_ref().display(), "trajectory written");
    Ok(())
}

/// ファイルから軌道を読み込む
///
/// 不正レコードで読み込みが終了した場合は、それまでのレコードを返す。
pub fn read_trajectory<P: AsRef<Path>>(path: P) -> Result<Trajectory, SimulationError> {
    let source = CsvSource::open(&path)?;
    let trajectory: Trajectory = source.collect();
    info!(records = trajectory.len(), path = %path.as_ref().display(), "trajectory read");
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    fn write_to_string(records: &[TrajectoryRecord]) -> String {
        let mut sink = CsvSink::from_writer(Vec::new()).unwrap();
        for record in records {
            sink.write_record(record).unwrap();
        }
        sink.finish().unwrap();
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_csv_format() {
        let text = write_to_string(&[
            TrajectoryRecord { t: 0.0, x: 10.0, y: 5.0 },
            TrajectoryRecord { t: 0.01, x: 9.851234567, y: 0.0000004 },
        ]);
        assert_eq!(
            text,
            "t,x,y\n0.000000,10.000000,5.000000\n0.010000,9.851235,0.000000\n"
        );
    }

    #[test]
    fn test_header_only_for_empty_trajectory() {
        assert_eq!(write_to_string(&[]), "t,x,y\n");
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trajectory.csv");
        let records = vec![
            TrajectoryRecord { t: 0.0, x: 10.0, y: 5.0 },
            TrajectoryRecord { t: 0.5, x: 3.1415926535, y: 2.7182818284 },
            TrajectoryRecord { t: 1.0, x: 0.1234564, y: 123456.789 },
        ];

        write_trajectory(&path, &records).unwrap();
        let loaded = read_trajectory(&path).unwrap();

        assert_eq!(loaded.len(), records.len());
        for (original, read) in records.iter().zip(&loaded) {
            assert_relative_eq!(original.t, read.t, epsilon = 5e-7);
            assert_relative_eq!(original.x, read.x, epsilon = 5e-7);
            assert_relative_eq!(original.y, read.y, epsilon = 5e-7);
        }
    }

    #[test]
    fn test_integrated_run_survives_file_round_trip() {
        use crate::config::{ModelParameters, SimulationConfig};
        use crate::simulation::framework::{integrate, integrate_into};

        let dir = tempdir().unwrap();
        let model = ModelParameters { a: 1.0, b: 0.5, c: 0.75, d: 0.25 };
        let sim = SimulationConfig {
            x0: 10.0,
            y0: 5.0,
            h: 0.01,
            t_max: 20.0,
            output: dir.path().join("lotka_volterra_results.csv"),
        };

        let mut sink = CsvSink::create(&sim.output).unwrap();
        let count = integrate_into(&model, &sim, &mut sink).unwrap();
        drop(sink);

        let in_memory = integrate(&model, &sim).unwrap();
        let loaded = read_trajectory(&sim.output).unwrap();
        assert_eq!(loaded.len(), count);
        assert_eq!(loaded.len(), in_memory.len());
        for (expected, read) in in_memory.iter().zip(&loaded) {
            assert_relative_eq!(expected.x, read.x, epsilon = 5e-7);
            assert_relative_eq!(expected.y, read.y, epsilon = 5e-7);
        }
    }

    #[test]
    fn test_malformed_record_stops_reading() {
        let text = "t,x,y\n0.0,1.0,2.0\n0.1,abc,3.0\n0.2,4.0,5.0\n";
        let mut source = CsvSource::from_reader(text.as_bytes());
        let records: Vec<_> = source.by_ref().collect();

        assert_eq!(records, vec![TrajectoryRecord { t: 0.0, x: 1.0, y: 2.0 }]);
        let malformed = source.malformed().unwrap();
        assert_eq!(malformed.line, 3);
        assert!(malformed.reason.contains("field x"));
        assert_eq!(source.next(), None);
    }

    /// ログ出力を取り込むための書き込み先
    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_malformed_record_is_logged_by_every_consumer() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let text = "t,x,y\n0.0,1.0,2.0\n0.1,abc,3.0\n";
        let records: Vec<_> = tracing::subscriber::with_default(subscriber, || {
            CsvSource::from_reader(text.as_bytes()).collect()
        });

        assert_eq!(records.len(), 1);
        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "log = {}", output);
        assert!(output.contains("malformed record at line 3"), "log = {}", output);
    }

    #[test]
    fn test_short_record_stops_reading() {
        let text = "t,x,y\n0.0,1.0,2.0\n0.1,2.0,3.0\n0.2,4.0\n";
        let mut source = CsvSource::from_reader(text.as_bytes());
        let records: Vec<_> = source.by_ref().collect();

        assert_eq!(records.len(), 2);
        assert!(source.malformed().unwrap().reason.contains("expected 3 fields"));
    }

    #[test]
    fn test_well_formed_source_has_no_malformed_record() {
        let text = "t,x,y\n0.000000,1.000000,2.000000\n";
        let mut source = CsvSource::from_reader(text.as_bytes());
        assert_eq!(source.by_ref().count(), 1);
        assert!(source.malformed().is_none());
    }

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let result = read_trajectory(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(SimulationError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_unwritable_sink() {
        let dir = tempdir().unwrap();
        let result = CsvSink::create(dir.path().join("no_such_dir").join("out.csv"));
        assert!(matches!(result, Err(SimulationError::SinkUnavailable { .. })));
    }
}
