use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::HexSourceError;
use super::reader::tokenize_line;
use crate::source::{FrameEvent, FrameSource, SourceError};

/// `FrameSource` over any buffered reader of hex text lines.
pub struct HexLineSource<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> HexLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }

    fn next_line(&mut self) -> Result<Option<FrameEvent>, HexSourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            // Non-UTF-8 bytes become U+FFFD and fail as an invalid token.
            match tokenize_line(&String::from_utf8_lossy(&self.buf)) {
                Ok(Some(bytes)) => {
                    return Ok(Some(FrameEvent {
                        line: self.line,
                        bytes,
                    }));
                }
                Ok(None) => continue,
                Err(token) => {
                    return Err(HexSourceError::InvalidToken {
                        line: self.line,
                        token,
                    });
                }
            }
        }
    }
}

impl HexLineSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameSource for HexLineSource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        self.next_line().map_err(SourceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::HexLineSource;
    use crate::source::{FrameEvent, FrameSource, SourceError};
    use std::io::Cursor;

    #[test]
    fn yields_frames_with_line_numbers() {
        let text = "# capture\n01 02 03\n\n0a 0b\n";
        let mut source = HexLineSource::new(Cursor::new(text));
        assert_eq!(
            source.next_frame().unwrap(),
            Some(FrameEvent {
                line: 2,
                bytes: vec![1, 2, 3]
            })
        );
        assert_eq!(
            source.next_frame().unwrap(),
            Some(FrameEvent {
                line: 4,
                bytes: vec![0x0a, 0x0b]
            })
        );
        assert_eq!(source.next_frame().unwrap(), None);
    }

    #[test]
    fn non_utf8_line_is_an_invalid_token() {
        let text: &[u8] = b"01 02\n01 \xff\n03 04\n";
        let mut source = HexLineSource::new(Cursor::new(text));
        assert_eq!(source.next_frame().unwrap().map(|e| e.line), Some(1));
        let err = source.next_frame().unwrap_err();
        assert!(matches!(
            err,
            SourceError::InvalidToken { line: 2, ref token } if token == "\u{fffd}"
        ));
        assert_eq!(
            source.next_frame().unwrap(),
            Some(FrameEvent {
                line: 3,
                bytes: vec![3, 4]
            })
        );
    }

    #[test]
    fn continues_after_invalid_token() {
        let text = "01 zz\n02 03";
        let mut source = HexLineSource::new(Cursor::new(text));
        let err = source.next_frame().unwrap_err();
        assert!(matches!(err, SourceError::InvalidToken { line: 1, ref token } if token == "zz"));
        assert_eq!(
            source.next_frame().unwrap(),
            Some(FrameEvent {
                line: 2,
                bytes: vec![2, 3]
            })
        );
    }
}
