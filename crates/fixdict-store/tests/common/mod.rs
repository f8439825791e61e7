use std::fs;
use std::path::Path;

/// Write one table file into `root/label/`
#[allow(dead_code)]
pub fn write_table(root: &Path, label: &str, file: &str, content: &str) {
    let dir = root.join(label);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

const FIELDS: &str = "schema_version: 0
rows:
  - {Tag: 11, FieldName: ClOrdID, Type: String}
  - {Tag: 54, FieldName: Side, Type: char}
";

const ENUMS: &str = "schema_version: 0
rows:
  - {Tag: 54, Enum: '1', Description: Buy}
  - {Tag: 54, Enum: '2', Description: Sell}
";

const MESSAGES: &str = "schema_version: 0
rows:
  - {MsgType: D, MessageName: NewOrderSingle, MsgID: 14, Desc: New order}
";

const SEGMENTS: &str = "schema_version: 0
rows:
  - {MsgID: 14, TagText: 54, Position: 2, Reqd: 1}
  - {MsgID: 14, TagText: 11, Position: 1, Reqd: 1}
";

/// Repository with FIX.4.4 and FIX.5.0SP2 only; no component files
#[allow(dead_code)]
pub fn write_sample_repo(root: &Path) {
    for label in ["FIX.4.4", "FIX.5.0SP2"] {
        write_table(root, label, "Fields.yaml", FIELDS);
        write_table(root, label, "Enums.yaml", ENUMS);
        write_table(root, label, "MsgType.yaml", MESSAGES);
        write_table(root, label, "MsgContents.yaml", SEGMENTS);
    }
}
