use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::csvfmt;
use crate::enums::LogAction;

/// An append-only audit log row recording one user action.
///
/// Serializes to the persisted CSV layout: `Time,User,Action,Nick,Silver`.
/// `nick` and `silver` are context fields and stay blank for actions they do
/// not apply to (login, upload).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLogEntry {
    #[serde(rename = "Time", with = "csvfmt::log_time")]
    pub time: NaiveDateTime,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Action")]
    pub action: LogAction,
    #[serde(rename = "Nick")]
    pub nick: Option<String>,
    #[serde(rename = "Silver")]
    pub silver: Option<u64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_context_cells_stay_blank() {
        let entry = ActionLogEntry {
            time: "2024-03-05T09:01:02".parse().unwrap(),
            user: "admin".into(),
            action: LogAction::LoginSuccess,
            nick: None,
            silver: None,
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&entry).unwrap();
        let written = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            written,
            "Time,User,Action,Nick,Silver\n2024-03-05 09:01:02,admin,login success,,\n"
        );
    }

    #[test]
    fn context_cells_carry_nick_and_amount() {
        let entry = ActionLogEntry {
            time: "2024-03-05T09:01:02".parse().unwrap(),
            user: "admin".into(),
            action: LogAction::RecordAdded,
            nick: Some("Alice".into()),
            silver: Some(50_000),
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&entry).unwrap();
        let written = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            written,
            "Time,User,Action,Nick,Silver\n2024-03-05 09:01:02,admin,record added,Alice,50000\n"
        );
    }

    #[test]
    fn blank_cells_read_back_as_none() {
        let raw = "Time,User,Action,Nick,Silver\n2024-03-05 09:01:02,admin,csv upload,,\n";
        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let entry: ActionLogEntry = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(entry.action, LogAction::CsvUpload);
        assert_eq!(entry.nick, None);
        assert_eq!(entry.silver, None);
    }
}
