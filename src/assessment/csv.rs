// src/assessment/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::assessment::InjuryAssessment;

const CSV_HEADER: &str = "id,model,zone,delta_v(m/s),angle(deg),p_mais3\n";

/// 評価結果を CSV ファイルに書き出す
pub fn write_csv_file(path: &str, assessments: &[InjuryAssessment]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv(&mut writer, assessments)?;
    writer.flush()?;
    Ok(())
}

/// CSVヘッダーと全行の書き込み
pub fn write_csv<W: Write>(
    writer: &mut W,
    assessments: &[InjuryAssessment],
) -> Result<(), std::io::Error> {
    writer.write_all(CSV_HEADER.as_bytes())?;
    for assessment in assessments {
        writer.write_all(create_csv_row(assessment).as_bytes())?;
    }
    Ok(())
}

/// CSV行の作成
pub fn create_csv_row(assessment: &InjuryAssessment) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        assessment.id,
        assessment.model,
        assessment.zone,
        assessment.delta_v,
        assessment.angle.to_degrees(),
        assessment.probability
    )
}
