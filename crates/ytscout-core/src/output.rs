//! Persisted artifacts
//!
//! The newline-delimited ID list handed from the search stage to the detail
//! stage, and the CSV table of classified videos.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ScoutError};
use crate::types::{ClassifiedVideo, VideoId};

/// Column order of the exported table
pub const CSV_HEADER: [&str; 14] = [
    "videoId",
    "publishedAt",
    "channelId",
    "channelTitle",
    "title",
    "description",
    "tags",
    "categoryId",
    "duration",
    "viewCount",
    "likeCount",
    "commentCount",
    "url",
    "content_tags",
];

const UTF8_BOM: &str = "\u{feff}";

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write IDs one per line, creating parent directories
pub fn write_ids<'a, I>(path: &Path, ids: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a VideoId>,
{
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(fs::File::create(path)?);
    let mut written = 0;
    for id in ids {
        writeln!(writer, "{}", id)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Read a newline-delimited ID list, ignoring blank lines
///
/// # Errors
/// Returns `MissingInput` if the file does not exist
pub fn read_ids(path: &Path) -> Result<Vec<VideoId>> {
    if !path.exists() {
        return Err(ScoutError::MissingInput(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}

fn write_row<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line)
}

/// Write classified videos as CSV (UTF-8 with BOM, header row first)
pub fn write_csv<W: Write>(writer: &mut W, videos: &[ClassifiedVideo]) -> Result<()> {
    writer.write_all(UTF8_BOM.as_bytes())?;
    write_row(writer, &CSV_HEADER)?;

    for video in videos {
        let r = &video.record;
        let views = r.view_count.to_string();
        let likes = r.like_count.to_string();
        let comments = r.comment_count.to_string();
        let tags = video.content_tags.to_string();
        write_row(
            writer,
            &[
                &r.id,
                &r.published_at,
                &r.channel_id,
                &r.channel_title,
                &r.title,
                &r.description,
                &r.tags,
                &r.category_id,
                &r.duration,
                &views,
                &likes,
                &comments,
                &r.url,
                &tags,
            ],
        )?;
    }

    Ok(())
}

/// Export classified videos to a CSV file, creating parent directories
pub fn export_csv(path: &Path, videos: &[ClassifiedVideo]) -> Result<()> {
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(fs::File::create(path)?);
    write_csv(&mut writer, videos)?;
    writer.flush()?;
    Ok(())
}
