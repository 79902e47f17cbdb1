use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    diagnostics::monitor::FrameObserver,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{LogoError, LogoResult},
    render::raster::{FrameRGBA, Rasterizer},
    scene::composition::Composition,
    scene::fingerprint::{SceneFingerprint, fingerprint_scene},
    scene::model::Scene,
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Rasterize each distinct scene of a chunk only once.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames that were actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused via static-frame elision.
    pub frames_elided: u64,
}

/// Build the scenes of `range` in frame order.
///
/// In parallel mode frames are built out of order on a worker pool; the result is identical to
/// the sequential one.
#[tracing::instrument(skip(comp, threading))]
pub fn build_scenes(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> LogoResult<Vec<Scene>> {
    if !threading.parallel {
        return Ok(range.frames().map(|f| comp.scene(f)).collect());
    }
    let pool = build_thread_pool(threading.threads)?;
    let frames: Vec<FrameIndex> = range.frames().collect();
    Ok(pool.install(|| frames.par_iter().map(|f| comp.scene(*f)).collect()))
}

/// Build and rasterize a single frame.
pub fn render_frame(
    comp: &Composition,
    frame: FrameIndex,
    rasterizer: &dyn Rasterizer,
) -> LogoResult<FrameRGBA> {
    rasterizer.rasterize(&comp.scene(frame))
}

/// Destination for rendered frames, fed in frame order one chunk at a time.
pub trait FrameSink {
    /// Accept `rgba`, the rendered image of `frame`.
    fn write_frame(&mut self, frame: FrameIndex, rgba: FrameRGBA) -> LogoResult<()>;
}

impl FrameSink for Vec<FrameRGBA> {
    fn write_frame(&mut self, _frame: FrameIndex, rgba: FrameRGBA) -> LogoResult<()> {
        self.push(rgba);
        Ok(())
    }
}

/// Render a frame range (inclusive start, exclusive end) and return frames plus stats.
///
/// `observer` is notified for every frame in order; it cannot influence the output.
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    rasterizer: &dyn Rasterizer,
    threading: &RenderThreading,
    observer: &mut dyn FrameObserver,
) -> LogoResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut out: Vec<FrameRGBA> = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = render_frames_to(comp, range, rasterizer, threading, observer, &mut out)?;
    Ok((out, stats))
}

/// Render a frame range into `sink`, handing off each chunk before the next one is rendered.
///
/// At most one chunk of frames is held in memory at a time.
#[tracing::instrument(skip(comp, rasterizer, threading, observer, sink))]
pub fn render_frames_to(
    comp: &Composition,
    range: FrameRange,
    rasterizer: &dyn Rasterizer,
    threading: &RenderThreading,
    observer: &mut dyn FrameObserver,
    sink: &mut dyn FrameSink,
) -> LogoResult<RenderStats> {
    if range.is_empty() {
        return Err(LogoError::validation("render range must be non-empty"));
    }

    let mut stats = RenderStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| LogoError::raster(format!("invalid chunk range: {e}")))?;
        tracing::debug!(start = chunk_start, end = chunk_end, "rendering chunk");

        let (frames, chunk_stats) = match pool.as_ref() {
            Some(pool) => {
                observer.frame_started(chunk.start);
                let chunk_out = render_chunk_parallel(comp, chunk, rasterizer, threading, pool)?;
                observer.chunk_finished(chunk);
                chunk_out
            }
            None => render_chunk_sequential(comp, chunk, rasterizer, threading, observer)?,
        };

        for (f, frame) in chunk.frames().zip(frames) {
            sink.write_frame(f, frame)?;
        }
        stats.frames_total += chunk_stats.frames_total;
        stats.frames_rendered += chunk_stats.frames_rendered;
        stats.frames_elided += chunk_stats.frames_elided;
        chunk_start = chunk_end;
    }

    Ok(stats)
}

fn render_chunk_sequential(
    comp: &Composition,
    range: FrameRange,
    rasterizer: &dyn Rasterizer,
    threading: &RenderThreading,
    observer: &mut dyn FrameObserver,
) -> LogoResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut out = Vec::<FrameRGBA>::with_capacity(range.len_frames() as usize);
    let mut seen = HashMap::<SceneFingerprint, usize>::new();
    let mut rendered = 0u64;

    for f in range.frames() {
        observer.frame_started(f);
        let scene = comp.scene(f);
        let reuse = if threading.static_frame_elision {
            let fp = fingerprint_scene(&scene);
            match seen.get(&fp).copied() {
                Some(idx) => Some(idx),
                None => {
                    seen.insert(fp, out.len());
                    None
                }
            }
        } else {
            None
        };

        let frame = match reuse {
            Some(idx) => out[idx].clone(),
            None => {
                rendered += 1;
                rasterizer.rasterize(&scene)?
            }
        };
        out.push(frame);
        observer.frame_finished(f);
    }

    let total = range.len_frames();
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered,
            frames_elided: total.saturating_sub(rendered),
        },
    ))
}

fn render_chunk_parallel(
    comp: &Composition,
    range: FrameRange,
    rasterizer: &dyn Rasterizer,
    threading: &RenderThreading,
    pool: &rayon::ThreadPool,
) -> LogoResult<(Vec<FrameRGBA>, RenderStats)> {
    let frames: Vec<FrameIndex> = range.frames().collect();
    let scenes: Vec<Scene> = pool.install(|| frames.par_iter().map(|f| comp.scene(*f)).collect());

    let mut unique_indices = Vec::<usize>::with_capacity(scenes.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(scenes.len());
    if threading.static_frame_elision {
        let mut first = HashMap::<SceneFingerprint, usize>::new();
        for (idx, scene) in scenes.iter().enumerate() {
            let fingerprint = fingerprint_scene(scene);
            if let Some(existing) = first.get(&fingerprint).copied() {
                frame_to_unique.push(existing);
            } else {
                let slot = unique_indices.len();
                unique_indices.push(idx);
                first.insert(fingerprint, slot);
                frame_to_unique.push(slot);
            }
        }
    } else {
        for idx in 0..scenes.len() {
            frame_to_unique.push(idx);
            unique_indices.push(idx);
        }
    }

    let rendered = pool.install(|| {
        unique_indices
            .par_iter()
            .map(|idx| rasterizer.rasterize(&scenes[*idx]))
            .collect::<Vec<_>>()
    });

    let mut unique_frames = Vec::<FrameRGBA>::with_capacity(rendered.len());
    for item in rendered {
        unique_frames.push(item?);
    }

    let mut out = Vec::<FrameRGBA>::with_capacity(frame_to_unique.len());
    for u in frame_to_unique {
        out.push(
            unique_frames
                .get(u)
                .ok_or_else(|| {
                    LogoError::raster("internal error: unique frame index out of range")
                })?
                .clone(),
        );
    }

    let total = scenes.len() as u64;
    let rendered_count = unique_indices.len() as u64;
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    ))
}

fn build_thread_pool(threads: Option<usize>) -> LogoResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LogoError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LogoError::raster(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
