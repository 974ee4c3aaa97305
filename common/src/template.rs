//! CSVテンプレート
//!
//! ダウンロード用の固定テキスト。サーバーには問い合わせない

pub const TEMPLATE_FILE_NAME: &str = "brand_template.csv";
pub const TEMPLATE_CONTENT_TYPE: &str = "text/csv";

pub const TEMPLATE_CSV: &str = "brand_name,companyName,mainContactName,vendorMainContactEmail,description,foundedInYear,countryOfOrigin,instagramUrl,websiteUrl,mainContactPhone
Test Brand 2,Brand Pitt LLC,Hugh Jazz,hugh@somebrand.com,Un-sustainable fashion is what we do best,2018,United States,instagram.com/unsustainablefashion,somebrand.com,+18005678901";

/// 必須列
pub const REQUIRED_FIELDS: [&str; 5] = [
    "brand_name",
    "companyName",
    "mainContactName",
    "vendorMainContactEmail",
    "websiteUrl",
];

/// 任意列（空欄・列なしはサーバー側の既定値）
pub const OPTIONAL_FIELDS: [&str; 5] = [
    "description",
    "foundedInYear",
    "countryOfOrigin",
    "instagramUrl",
    "mainContactPhone",
];

pub const DEFAULTS_NOTE: &str =
    "If optional columns are missing or fields are empty, default values will be used.";
pub const PHONE_NOTE: &str =
    "Phone numbers must be in international format with a plus sign (e.g., +18005678910).";

pub fn template_bytes() -> &'static [u8] {
    TEMPLATE_CSV.as_bytes()
}

/// テンプレートのヘッダー列
pub fn header_fields() -> Vec<&'static str> {
    TEMPLATE_CSV
        .lines()
        .next()
        .map(|header| header.split(',').collect())
        .unwrap_or_default()
}
