//! Audio backend for the player screen
//!
//! Decodes the bundle's audio file up front and plays it through a CPAL
//! output stream, with a lock-free design:
//!
//! - UI thread: sends commands via an `rtrb` SPSC ringbuffer
//! - Audio callback: owns the decoded samples exclusively
//! - Atomics: UI reads position/playing/finished without locks
//!
//! The stream lives on a dedicated thread that parks until the handle
//! drops, so leaving the player screen releases the device on every exit
//! path. [`PlaybackHandle`] implements the transport's `MediaClock`, making
//! this backend the real-media clock source.

use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use fireside_core::transport::clock::MediaClock;

/// Commands sent from the UI to the audio callback
enum SinkCommand {
    Play,
    Pause,
    /// Jump to an absolute frame
    Seek(u64),
}

/// Lock-free state the UI reads from the audio callback
struct PlaybackAtomics {
    /// Playhead position in frames
    position: AtomicU64,
    /// Whether the callback is producing samples
    playing: AtomicBool,
    /// Set once when the playhead runs off the end; consumed by the clock
    finished: AtomicBool,
}

impl PlaybackAtomics {
    fn new() -> Self {
        Self {
            position: AtomicU64::new(0),
            playing: AtomicBool::new(false),
            finished: AtomicBool::new(false),
        }
    }
}

/// Decoded clip ready for the output callback
struct DecodedAudio {
    /// Interleaved stereo samples
    samples: Vec<f32>,
    sample_rate: u32,
}

impl DecodedAudio {
    fn frames(&self) -> u64 {
        (self.samples.len() / 2) as u64
    }
}

/// Handle to a running playback stream; the player screen's real-media
/// clock. Dropping it shuts the stream down and releases the device.
pub struct PlaybackHandle {
    commands: rtrb::Producer<SinkCommand>,
    atomics: Arc<PlaybackAtomics>,
    sample_rate: u32,
    total_frames: u64,
    shutdown: Option<std::sync::mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        // Dropping the sender unparks the audio thread, which closes the
        // stream before exiting.
        self.shutdown.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        log::info!("playback stream closed");
    }
}

impl MediaClock for PlaybackHandle {
    fn play(&mut self) -> bool {
        if self.commands.push(SinkCommand::Play).is_err() {
            log::warn!("audio command queue full, play dropped");
            return false;
        }
        self.atomics.playing.store(true, Ordering::Relaxed);
        true
    }

    fn pause(&mut self) {
        let _ = self.commands.push(SinkCommand::Pause);
        self.atomics.playing.store(false, Ordering::Relaxed);
    }

    fn seek_to(&mut self, seconds: f64) {
        let frame =
            ((seconds.max(0.0) * f64::from(self.sample_rate)) as u64).min(self.total_frames);
        let _ = self.commands.push(SinkCommand::Seek(frame));
        // Mirror immediately so the UI doesn't read the stale position for
        // a callback period.
        self.atomics.position.store(frame, Ordering::Relaxed);
    }

    fn position_seconds(&self) -> f64 {
        self.atomics.position.load(Ordering::Relaxed) as f64 / f64::from(self.sample_rate)
    }

    fn duration_seconds(&self) -> Option<f64> {
        Some(self.total_frames as f64 / f64::from(self.sample_rate))
    }

    fn take_ended(&mut self) -> bool {
        self.atomics.finished.swap(false, Ordering::Relaxed)
    }
}

/// Decode an audio file and start a (paused) output stream for it.
///
/// Fails when the file can't be decoded or no output device accepts the
/// clip's sample rate; the player falls back to the simulated clock in
/// that case.
pub fn start_playback(path: &Path) -> Result<PlaybackHandle> {
    let decoded = decode_file(path)?;
    let sample_rate = decoded.sample_rate;
    let total_frames = decoded.frames();
    log::info!(
        "decoded {:?}: {} frames at {} Hz",
        path.file_name().unwrap_or_default(),
        total_frames,
        sample_rate
    );

    let atomics = Arc::new(PlaybackAtomics::new());
    let (producer, consumer) = rtrb::RingBuffer::new(64);
    let (ready_tx, ready_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = std::sync::mpsc::channel::<()>();

    let callback_atomics = atomics.clone();
    let thread = std::thread::Builder::new()
        .name("fireside-audio".to_string())
        .spawn(move || {
            match build_stream(decoded, consumer, callback_atomics) {
                Ok(stream) => {
                    if let Err(e) = stream.play() {
                        let _ = ready_tx.send(Err(anyhow!("could not start stream: {e}")));
                        return;
                    }
                    let _ = ready_tx.send(Ok(()));
                    // Park until the handle drops
                    let _ = shutdown_rx.recv();
                    drop(stream);
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                }
            }
        })
        .context("could not spawn audio thread")?;

    ready_rx
        .recv()
        .context("audio thread died during setup")??;

    Ok(PlaybackHandle {
        commands: producer,
        atomics,
        sample_rate,
        total_frames,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

/// Build the CPAL output stream; runs on the audio thread because streams
/// are not `Send` on every backend.
fn build_stream(
    decoded: DecodedAudio,
    mut commands: rtrb::Consumer<SinkCommand>,
    atomics: Arc<PlaybackAtomics>,
) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .context("no audio output device")?;

    let config = pick_output_config(&device, decoded.sample_rate)?;
    let channels = config.channels() as usize;
    let total = decoded.frames() as usize;
    let samples = decoded.samples;

    // Callback-owned playback state; the UI only sees the atomics
    let mut position: usize = 0;
    let mut playing = false;

    let stream = device.build_output_stream(
        &config.into(),
        move |output: &mut [f32], _| {
            while let Ok(command) = commands.pop() {
                match command {
                    SinkCommand::Play => playing = true,
                    SinkCommand::Pause => playing = false,
                    SinkCommand::Seek(frame) => {
                        position = (frame as usize).min(total);
                        atomics.position.store(position as u64, Ordering::Relaxed);
                    }
                }
            }

            if !playing {
                output.fill(0.0);
                return;
            }

            for frame_out in output.chunks_mut(channels) {
                if position >= total {
                    frame_out.fill(0.0);
                    continue;
                }
                let left = samples[position * 2];
                let right = samples[position * 2 + 1];
                match channels {
                    1 => frame_out[0] = (left + right) * 0.5,
                    _ => {
                        frame_out[0] = left;
                        frame_out[1] = right;
                        for extra in frame_out.iter_mut().skip(2) {
                            *extra = 0.0;
                        }
                    }
                }
                position += 1;
            }

            atomics.position.store(position as u64, Ordering::Relaxed);
            if position >= total {
                playing = false;
                atomics.playing.store(false, Ordering::Relaxed);
                atomics.finished.store(true, Ordering::Relaxed);
            }
        },
        move |err| log::warn!("audio stream error: {err}"),
        None,
    )?;

    Ok(stream)
}

/// Find an f32 output config running at the clip's rate.
fn pick_output_config(
    device: &cpal::Device,
    sample_rate: u32,
) -> Result<cpal::SupportedStreamConfig> {
    let configs = device
        .supported_output_configs()
        .context("could not query output configs")?;

    for candidate in configs {
        if candidate.sample_format() != SampleFormat::F32 {
            continue;
        }
        if candidate.min_sample_rate().0 <= sample_rate
            && sample_rate <= candidate.max_sample_rate().0
        {
            return Ok(candidate.with_sample_rate(SampleRate(sample_rate)));
        }
    }

    Err(anyhow!(
        "no f32 output config at {sample_rate} Hz; playback unavailable"
    ))
}

/// Decode a whole audio file to interleaved stereo f32.
fn decode_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).with_context(|| format!("could not open {:?}", path))?;
    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .context("unrecognized audio container")?;
    let mut format = probed.format;

    let track = format.default_track().context("no audio track")?;
    let track_id = track.id;
    let channels = track
        .codec_params
        .channels
        .map(|set| set.count())
        .unwrap_or(2);
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("unknown sample rate")?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("unsupported audio codec")?;

    let mut samples = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream surfaces as an IO error
            Err(SymphoniaError::IoError(_)) => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };
        if packet.track_id() != track_id {
            continue;
        }

        let buffer = match decoder.decode(&packet) {
            Ok(buffer) => buffer,
            // Recoverable bitstream glitch, skip the packet
            Err(SymphoniaError::DecodeError(e)) => {
                log::debug!("skipping undecodable packet: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let spec = *buffer.spec();
        let target = sample_buf
            .get_or_insert_with(|| SampleBuffer::new(buffer.capacity() as u64, spec));
        target.copy_interleaved_ref(buffer);

        match channels {
            1 => {
                for &sample in target.samples() {
                    samples.push(sample);
                    samples.push(sample);
                }
            }
            2 => samples.extend_from_slice(target.samples()),
            n => {
                // Fold down: keep the first two channels of each frame
                for frame in target.samples().chunks(n) {
                    samples.push(frame[0]);
                    samples.push(frame[1]);
                }
            }
        }
    }

    if samples.is_empty() {
        return Err(anyhow!("audio file decoded to zero samples"));
    }

    Ok(DecodedAudio {
        samples,
        sample_rate,
    })
}
