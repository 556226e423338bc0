//! CSV生成（共通ライブラリ）
//!
//! 抽出結果のDataPoint配列を `Field,Value` の2列CSVに変換する。
//! すべてのセルをダブルクォートで囲み、内部の `"` は `""` にする。

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::types::DataPoint;

/// ダウンロード時のファイル名
pub const CSV_FILE_NAME: &str = "extracted_data_points.csv";

/// ダウンロード時のMIMEタイプ
pub const CSV_MIME_TYPE: &str = "text/csv; charset=utf-8";

const HEADER: [&str; 2] = ["Field", "Value"];

/// DataPoint配列をCSV文字列に変換
///
/// 行は `\n` で連結し、末尾に改行は付けない。
/// セル内の改行・カンマはクォート内にそのまま残る。
///
/// # Examples
/// ```
/// use docparser_common::{to_csv, DataPoint};
///
/// let csv = to_csv(&[DataPoint::new("Name", "Jo \"J\" Doe")]).unwrap();
/// assert_eq!(csv, "\"Field\",\"Value\"\n\"Name\",\"Jo \"\"J\"\" Doe\"");
/// ```
pub fn to_csv(data_points: &[DataPoint]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| Error::Csv(e.to_string()))?;

    for point in data_points {
        writer
            .write_record([point.field.as_str(), point.value.as_str()])
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))?;

    // 最終行の区切り文字を除去
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}
