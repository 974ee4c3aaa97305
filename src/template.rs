//! CSVテンプレートの書き出し

use crate::error::Result;
use brand_onboarding_common::template::template_bytes;
use brand_onboarding_common::TEMPLATE_FILE_NAME;
use std::path::{Path, PathBuf};

/// テンプレートを書き出して出力先を返す
///
/// 出力先の指定がなければカレントディレクトリの`brand_template.csv`
pub fn write_template(output: Option<&Path>) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILE_NAME));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, template_bytes())?;
    Ok(path)
}
