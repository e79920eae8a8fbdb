use std::ops::Range;

/// One contiguous run of rewritten output and the input bytes it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    out: Range<usize>,
    src: Range<usize>,
    /// Copied byte-for-byte, so offsets map linearly. Otherwise the run is
    /// generated markup standing in for the whole of `src`.
    verbatim: bool,
}

/// Maps byte offsets of rewritten text back to the original input.
///
/// Each pass hands the next one its output together with such a map, so spans
/// found late can still be reported against the text the caller passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    segments: Vec<Segment>,
}

impl SourceMap {
    /// The map of text that has not been rewritten at all.
    pub fn identity(len: usize) -> Self {
        let mut builder = SourceMapBuilder::default();
        builder.push(len, 0..len, true);
        builder.finish()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.segments.last().map_or(0, |s| s.out.end)
    }

    fn source_len(&self) -> usize {
        self.segments.last().map_or(0, |s| s.src.end)
    }

    /// Index of the segment containing byte `pos`, if any.
    fn segment_at(&self, pos: usize) -> Option<&Segment> {
        let index = self.segments.partition_point(|s| s.out.end <= pos);
        self.segments.get(index).filter(|s| s.out.start <= pos)
    }

    /// Original offset of `pos` taken as the start of a range.
    pub fn source_start(&self, pos: usize) -> usize {
        match self.segment_at(pos) {
            Some(seg) if seg.verbatim => seg.src.start + (pos - seg.out.start),
            Some(seg) => seg.src.start,
            None => self.source_len(),
        }
    }

    /// Original offset of `pos` taken as the (exclusive) end of a range.
    pub fn source_end(&self, pos: usize) -> usize {
        if pos == 0 {
            return self.segments.first().map_or(0, |s| s.src.start);
        }
        match self.segment_at(pos - 1) {
            Some(seg) if seg.verbatim => seg.src.start + (pos - seg.out.start),
            Some(seg) => seg.src.end,
            None => self.source_len(),
        }
    }

    /// True if no byte of `range` lies inside generated markup.
    pub fn is_verbatim(&self, range: Range<usize>) -> bool {
        let first = self.segments.partition_point(|s| s.out.end <= range.start);
        self.segments[first..]
            .iter()
            .take_while(|s| s.out.start < range.end)
            .all(|s| s.verbatim)
    }
}

#[derive(Debug, Default)]
pub struct SourceMapBuilder {
    segments: Vec<Segment>,
}

impl SourceMapBuilder {
    fn out_len(&self) -> usize {
        self.segments.last().map_or(0, |s| s.out.end)
    }

    fn push(&mut self, len: usize, src: Range<usize>, verbatim: bool) {
        if len == 0 {
            return;
        }
        let start = self.out_len();
        self.segments.push(Segment {
            out: start..start + len,
            src,
            verbatim,
        });
    }

    /// Records `range` of the previous text, described by `input`, as copied
    /// through unchanged.
    pub fn copy(&mut self, input: &SourceMap, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = input.segments.partition_point(|s| s.out.end <= range.start);
        for seg in &input.segments[first..] {
            if seg.out.start >= range.end {
                break;
            }
            let lo = seg.out.start.max(range.start);
            let hi = seg.out.end.min(range.end);
            let src = if seg.verbatim {
                seg.src.start + (lo - seg.out.start)..seg.src.start + (hi - seg.out.start)
            } else {
                seg.src.clone()
            };
            self.push(hi - lo, src, seg.verbatim);
        }
    }

    /// Records `len` bytes of new markup replacing original bytes `src`.
    pub fn generated(&mut self, len: usize, src: Range<usize>) {
        self.push(len, src, false);
    }

    pub fn finish(self) -> SourceMap {
        SourceMap {
            segments: self.segments,
        }
    }
}
