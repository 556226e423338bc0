//! APIレスポンスパーサー
//!
//! 抽出APIのレスポンスは信頼できない入力として扱い、
//! 型付きの ExtractionResult か、どこが不正かを示すエラーに変換する。

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::{DataPoint, ExtractionResult};

/// HTTPステータスとボディから抽出結果を得る
///
/// 2xx以外はエラー。バックエンドのエラーボディ `{"error": "..."}` は
/// そのメッセージを、それ以外は生のボディを `Error::Status` に入れる。
///
/// # Examples
/// ```
/// use docparser_common::parse_upload_response;
///
/// let body = r##"{"markdown": "# H", "data_points": []}"##;
/// let result = parse_upload_response(200, body).unwrap();
/// assert_eq!(result.markdown, "# H");
///
/// assert!(parse_upload_response(500, r#"{"error": "Processing failed"}"#).is_err());
/// ```
pub fn parse_upload_response(status: u16, body: &str) -> Result<ExtractionResult> {
    if !(200..300).contains(&status) {
        return Err(Error::Status {
            status,
            message: error_message(body),
        });
    }

    parse_extraction_response(body)
}

/// 成功レスポンスのボディをパース
///
/// # Returns
/// * `Ok(ExtractionResult)` - パース成功
/// * `Err(Error::MalformedResponse)` - 形式不正（不正箇所のパス付き）
pub fn parse_extraction_response(body: &str) -> Result<ExtractionResult> {
    let value: Value = serde_json::from_str(body.trim())
        .map_err(|e| Error::MalformedResponse(format!("JSONではありません: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| malformed("$", "オブジェクト", &value))?;

    let markdown = match object.get("markdown") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(malformed("markdown", "文字列", other)),
        None => return Err(Error::MalformedResponse("markdown がありません".into())),
    };

    let data_points = match object.get("data_points") {
        // 構造化に失敗したときバックエンドは null を返す
        Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse_data_point(i, item))
            .collect::<Result<Vec<_>>>()?,
        Some(other) => return Err(malformed("data_points", "配列", other)),
        None => return Err(Error::MalformedResponse("data_points がありません".into())),
    };

    Ok(ExtractionResult {
        markdown,
        data_points,
    })
}

fn parse_data_point(index: usize, item: &Value) -> Result<DataPoint> {
    let path = format!("data_points[{}]", index);
    let object = item
        .as_object()
        .ok_or_else(|| malformed(&path, "オブジェクト", item))?;

    Ok(DataPoint {
        field: cell_text(object, &path, "field")?,
        value: cell_text(object, &path, "value")?,
    })
}

/// セル値を文字列化（数値・真偽値はJSON表記、nullは空文字）
fn cell_text(object: &Map<String, Value>, path: &str, key: &str) -> Result<String> {
    let path = format!("{}.{}", path, key);
    match object.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) => Ok(String::new()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(other) => Err(malformed(&path, "文字列", other)),
        None => Err(Error::MalformedResponse(format!("{} がありません", path))),
    }
}

fn error_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("error") {
            return message.clone();
        }
    }
    body.trim().to_string()
}

fn malformed(path: &str, expected: &str, actual: &Value) -> Error {
    Error::MalformedResponse(format!(
        "{} は{}である必要があります（実際: {}）",
        path,
        expected,
        type_name(actual)
    ))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
