//! `/upload` エンドポイントとの契約

/// アップロード先（ページのオリジンからの相対パス）
pub const UPLOAD_PATH: &str = "/upload";

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// CSVとして受け付けるファイル名か（大文字小文字を区別）
pub fn is_csv_file_name(name: &str) -> bool {
    name.ends_with(".csv")
}

/// オリジンからアップロードURLを組み立てる
///
/// 空のオリジンは相対パスのまま返す（ブラウザ側）
pub fn upload_url(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), UPLOAD_PATH)
}
