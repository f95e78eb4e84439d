use crate::{AnnotatorError, LabelPair};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Where annotations are written unless configured otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "tsv/manual_label_gender_status.tsv";

/// Column header of the output file.
pub const HEADER: [&str; 3] = ["filename", "gender", "status"];

/// Write labelled images as TSV with headers:
/// filename,gender,status
///
/// Rows follow the order of `images`; names without an entry in `annotations`
/// are skipped. Parent directories are created and an existing file is replaced.
pub fn write_tsv(
    images: &[String],
    annotations: &HashMap<String, LabelPair>,
    path: impl AsRef<Path>,
) -> Result<usize, AnnotatorError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_tsv_to(file, images, annotations)
}

/// Same as [`write_tsv`] but into any writer. Returns the number of data rows.
pub fn write_tsv_to<W: io::Write>(
    writer: W,
    images: &[String],
    annotations: &HashMap<String, LabelPair>,
) -> Result<usize, AnnotatorError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);
    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for name in images {
        if let Some(pair) = annotations.get(name) {
            wtr.write_record([name.as_str(), pair.gender.as_str(), pair.status.as_str()])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, Status};
    use anyhow::Result;
    use tempfile::tempdir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_header_only_when_nothing_labelled() -> Result<()> {
        let mut buf = Vec::new();
        let rows = write_tsv_to(&mut buf, &names(&["a.png"]), &HashMap::new())?;
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(buf)?, "filename\tgender\tstatus\n");
        Ok(())
    }

    #[test]
    fn rows_follow_image_order_and_skip_unlabelled() -> Result<()> {
        let images = names(&["a.png", "b.png", "c.png"]);
        let mut annotations = HashMap::new();
        annotations.insert(
            "c.png".to_string(),
            LabelPair::new(Gender::Female, Status::Commoner),
        );
        annotations.insert(
            "a.png".to_string(),
            LabelPair::new(Gender::Male, Status::Incarnation),
        );

        let mut buf = Vec::new();
        write_tsv_to(&mut buf, &images, &annotations)?;
        assert_eq!(
            String::from_utf8(buf)?,
            "filename\tgender\tstatus\n\
             a.png\tmale\tincarnation\n\
             c.png\tfemale\tcommoner\n"
        );
        Ok(())
    }

    #[test]
    fn names_are_written_unquoted() -> Result<()> {
        let images = names(&["say \"hi\".png"]);
        let mut annotations = HashMap::new();
        annotations.insert(images[0].clone(), LabelPair::default());

        let mut buf = Vec::new();
        write_tsv_to(&mut buf, &images, &annotations)?;
        assert!(String::from_utf8(buf)?.contains("say \"hi\".png\tmale\tnoble\n"));
        Ok(())
    }

    #[test]
    fn creates_parent_dirs_and_replaces_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("tsv").join("out.tsv");
        let images = names(&["a.png", "b.png"]);
        let mut annotations = HashMap::new();
        annotations.insert("a.png".to_string(), LabelPair::default());
        annotations.insert("b.png".to_string(), LabelPair::default());
        write_tsv(&images, &annotations, &path)?;

        annotations.remove("b.png");
        write_tsv(&images, &annotations, &path)?;

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)?;
        let headers = rdr.headers()?.clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());
        let recs: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>()?;
        assert_eq!(recs.len(), 1);
        assert_eq!(&recs[0][0], "a.png");
        assert_eq!(&recs[0][1], "male");
        assert_eq!(&recs[0][2], "noble");
        Ok(())
    }
}
