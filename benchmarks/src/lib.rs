//! Scene fixtures shared by the projection benchmarks.

use glam::{Mat4, Vec3};
use penumbra::{
    CascadeSettings, IntRect, LightId, LightProxy, LightType, ProjectedShadow, Projection,
    ShadowId, ViewInfo,
};

/// `count` views side by side across a 1920x1080 target.
pub fn setup_views(count: u32) -> Vec<ViewInfo> {
    let width = 1920 / count.max(1);
    (0..count)
        .map(|i| {
            let x = (i * width) as i32;
            ViewInfo::look_at(
                Vec3::new(i as f32 * 2.0, 6.0, 24.0),
                Vec3::ZERO,
                Vec3::Y,
                Projection::perspective(60.0, width as f32 / 1080.0, 0.1, 1000.0),
                IntRect::new(x, 0, x + width as i32, 1080),
            )
        })
        .collect()
}

/// A directional light with `count` fading cascades relevant to every view.
pub fn setup_cascades(count: u32, view_count: usize) -> anyhow::Result<(LightProxy, Vec<ProjectedShadow>)> {
    let light = LightProxy::directional(LightId(0), Vec3::new(-0.3, -1.0, -0.2).normalize());
    let shadows = (0..count)
        .map(|i| {
            let near = 0.1 + i as f32 * 16.0;
            let fade = if i == 0 { 0.0 } else { 2.0 };
            ProjectedShadow::builder(ShadowId(i), LightType::Directional)
                .whole_scene()
                .resolution(2048, 2048)
                .cascade(CascadeSettings::new(i, near, near + 16.0).with_fade_plane(fade))
                .subject_depth(0.0, 400.0)
                .views(vec![1.0; view_count], vec![true; view_count])
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((light, shadows))
}

/// A spot light with `count` per-object shadows scattered on a grid.
pub fn setup_per_object(count: u32, view_count: usize) -> anyhow::Result<(LightProxy, Vec<ProjectedShadow>)> {
    let light = LightProxy::spot(LightId(1), Vec3::new(0.0, 20.0, 0.0), Vec3::NEG_Y, 60.0);
    let side = (count as f32).sqrt().ceil().max(1.0) as u32;
    let shadows = (0..count)
        .map(|i| {
            let center = Vec3::new(
                (i % side) as f32 * 4.0 - side as f32 * 2.0,
                0.0,
                (i / side) as f32 * 4.0 - side as f32 * 2.0,
            );
            let receiver = Mat4::orthographic_rh(-1.5, 1.5, -1.5, 1.5, -1.5, 1.5)
                * Mat4::from_translation(-center);
            ProjectedShadow::builder(ShadowId(i), LightType::Spot)
                .resolution(128 << (i % 3), 128 << (i % 3))
                .receiver(receiver.inverse(), Vec3::ZERO)
                .subject_depth(0.0, 10.0)
                .views(vec![0.5 + (i % 2) as f32 * 0.5; view_count], vec![true; view_count])
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((light, shadows))
}
