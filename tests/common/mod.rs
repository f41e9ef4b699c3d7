use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::FileOptions;
use zip::CompressionMethod;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="1"><xf numFmtId="0"/></cellXfs></styleSheet>"#;

/// Writes a minimal zip-container workbook shaped like the real reports: a
/// header band row, an institution-name column, and a numeric body where the
/// cell at raw zero-based (r, c) holds `base + r * 100 + c`. Deterministic
/// values keep the expected numbers computable in asserts.
pub fn write_report(dir: &Path, yyyymm: &str, report: &str, rows: u32, cols: u32, base: f64) {
    let path = dir.join(format!("{yyyymm}_{report}.xls"));
    let file = File::create(&path).expect("create fixture workbook");
    let mut zip = zip::ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Stored);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", WORKBOOK.to_string()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/styles.xml", STYLES.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows, cols, base)),
    ];
    for (name, body) in parts {
        zip.start_file(name, options.clone()).expect("zip entry");
        zip.write_all(body.as_bytes()).expect("zip body");
    }
    zip.finish().expect("finish fixture workbook");
}

/// Expected body value for a registry (row offset, column offset) pair, i.e.
/// the raw cell one past the header band and the institution column.
pub fn cell_value(base: f64, row_off: u32, col_off: u32) -> f64 {
    base + f64::from(row_off + 1) * 100.0 + f64::from(col_off + 1)
}

fn sheet_xml(rows: u32, cols: u32, base: f64) -> String {
    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for r in 0..rows {
        sheet.push_str(&format!("<row r=\"{}\">", r + 1));
        for c in 0..cols {
            let cell = format!("{}{}", col_ref(c), r + 1);
            if r == 0 {
                sheet.push_str(&format!(
                    "<c r=\"{cell}\" t=\"inlineStr\"><is><t>栏{c}</t></is></c>"
                ));
            } else if c == 0 {
                sheet.push_str(&format!(
                    "<c r=\"{cell}\" t=\"inlineStr\"><is><t>行{r}</t></is></c>"
                ));
            } else {
                let v = base + f64::from(r) * 100.0 + f64::from(c);
                sheet.push_str(&format!("<c r=\"{cell}\"><v>{v}</v></c>"));
            }
        }
        sheet.push_str("</row>");
    }
    sheet.push_str("</sheetData></worksheet>");
    sheet
}

/// Zero-based column index to spreadsheet column letters.
fn col_ref(mut c: u32) -> String {
    let mut s = String::new();
    loop {
        s.insert(0, (b'A' + (c % 26) as u8) as char);
        if c < 26 {
            break;
        }
        c = c / 26 - 1;
    }
    s
}
