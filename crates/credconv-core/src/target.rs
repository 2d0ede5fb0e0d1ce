//! Bitwarden login CSV records and serialization.

use crate::error::ConvertError;

/// Column names of the Bitwarden import layout, in output order.
pub const TARGET_HEADER: [&str; 11] = [
    "folder",
    "favorite",
    "type",
    "name",
    "notes",
    "fields",
    "reprompt",
    "login_uri",
    "login_username",
    "login_password",
    "login_totp",
];

/// Index of `login_password` in [`TARGET_HEADER`].
pub const LOGIN_PASSWORD_COLUMN: usize = 9;

/// Value of the `type` column for every converted entry.
pub const LOGIN_TYPE: &str = "login";

/// One output row. Field order matches [`TARGET_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRecord {
    pub folder: String,
    pub favorite: String,
    pub kind: String,
    pub name: String,
    pub notes: String,
    pub fields: String,
    pub reprompt: String,
    pub login_uri: String,
    pub login_username: String,
    pub login_password: String,
    pub login_totp: String,
}

impl TargetRecord {
    /// A login entry; every column other than the four given ones is empty.
    pub fn login(name: String, uri: &str, username: &str, password: &str) -> Self {
        Self {
            kind: LOGIN_TYPE.to_string(),
            name,
            login_uri: uri.to_string(),
            login_username: username.to_string(),
            login_password: password.to_string(),
            ..Self::default()
        }
    }

    pub fn as_row(&self) -> [&str; 11] {
        [
            self.folder.as_str(),
            self.favorite.as_str(),
            self.kind.as_str(),
            self.name.as_str(),
            self.notes.as_str(),
            self.fields.as_str(),
            self.reprompt.as_str(),
            self.login_uri.as_str(),
            self.login_username.as_str(),
            self.login_password.as_str(),
            self.login_totp.as_str(),
        ]
    }
}

/// Builds the csv writer used for Bitwarden output: comma, `"` quoting only
/// where needed, doubled quotes, `\n` terminators.
pub(crate) fn output_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

/// Finishes a writer into text without the terminator after the last row.
pub(crate) fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ConvertError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::Output(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| ConvertError::Output(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Serializes the header line followed by one line per record.
pub fn serialize(records: &[TargetRecord]) -> Result<String, ConvertError> {
    let mut writer = output_writer();
    writer.write_record(TARGET_HEADER)?;
    for record in records {
        writer.write_record(record.as_row())?;
    }
    finish(writer)
}
