use paint_core::cues::BrushTone;
use paint_core::NoteEvent;
use web_sys as web;

// Reverb tail applied to the brush tone
const REVERB_SECONDS: f32 = 2.0;
const REVERB_DECAY_PER_SEC: f32 = 2.0;
const MASTER_LEVEL: f32 = 0.8;

/// WebAudio graph: one-shot synth notes straight to master, and a
/// continuous brush oscillator with a reverb send.
pub struct AudioBus {
    ctx: web::AudioContext,
    master: web::GainNode,
    brush_osc: web::OscillatorNode,
    brush_gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

// Procedural stereo impulse response: exponentially decaying noise.
fn build_reverb(audio_ctx: &web::AudioContext) -> Option<web::ConvolverNode> {
    let reverb = match web::ConvolverNode::new(audio_ctx) {
        Ok(r) => r,
        Err(e) => {
            log::error!("ConvolverNode error: {:?}", e);
            return None;
        }
    };
    reverb.set_normalize(true);
    let sr = audio_ctx.sample_rate();
    let len = (sr * REVERB_SECONDS) as u32;
    let ir = audio_ctx.create_buffer(2, len.max(1), sr).ok()?;
    // simple xorshift32 for deterministic noise
    let mut seeds: [u32; 2] = [0x1234ABCD, 0x7890FEDC];
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut buf: Vec<f32> = vec![0.0; len as usize];
        let dt = 1.0_f32 / sr;
        for (i, sample) in buf.iter_mut().enumerate() {
            let mut x = *seed;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *seed = x;
            let n = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let t = i as f32 * dt;
            *sample = n * (1.0 - t / REVERB_SECONDS).max(0.0).powf(REVERB_DECAY_PER_SEC);
        }
        let _ = ir.copy_to_channel(&mut buf, ch as i32);
    }
    reverb.set_buffer(Some(&ir));
    Some(reverb)
}

impl AudioBus {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, MASTER_LEVEL, "Master")?;
        let _ = master.connect_with_audio_node(&ctx.destination());

        let brush_osc =
            web::OscillatorNode::new(&ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        brush_osc.set_type(web::OscillatorType::Sine);
        let brush_gain = create_gain(&ctx, 0.0, "Brush")?;
        let _ = brush_osc.connect_with_audio_node(&brush_gain);
        let _ = brush_gain.connect_with_audio_node(&master);
        if let Some(reverb) = build_reverb(&ctx) {
            let _ = brush_gain.connect_with_audio_node(&reverb);
            let _ = reverb.connect_with_audio_node(&master);
        }
        let _ = brush_osc.start();

        Ok(Self {
            ctx,
            master,
            brush_osc,
            brush_gain,
        })
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        let _ = self.ctx.resume();
    }

    /// Fire a single enveloped sine note.
    pub fn play_note(&self, note: &NoteEvent) {
        let src = match web::OscillatorNode::new(&self.ctx) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("OscillatorNode error: {:?}", e);
                return;
            }
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(note.frequency_hz);
        let gain = match web::GainNode::new(&self.ctx) {
            Ok(g) => g,
            Err(_) => return,
        };
        gain.gain().set_value(0.0);
        let t0 = self.ctx.current_time() + 0.005 + note.start_offset_sec as f64;
        let dur = note.duration_sec as f64;
        let _ = gain.gain().set_value_at_time(0.0, t0);
        let _ = gain
            .gain()
            .linear_ramp_to_value_at_time(note.velocity, t0 + 0.02);
        let _ = gain.gain().linear_ramp_to_value_at_time(0.0, t0 + dur);
        let _ = src.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&self.master);
        let _ = src.start_with_when(t0);
        let _ = src.stop_with_when(t0 + dur + 0.05);
    }

    /// Glide the brush oscillator toward this frame's pitch and level.
    pub fn set_brush_tone(&self, tone: &BrushTone) {
        let now = self.ctx.current_time();
        self.brush_osc.frequency().set_value(tone.frequency_hz);
        let g = self.brush_gain.gain();
        let _ = g.cancel_scheduled_values(now);
        let _ = g.set_value_at_time(g.value(), now);
        let _ = g.linear_ramp_to_value_at_time(tone.amplitude, now + tone.ramp_sec as f64);
    }
}
