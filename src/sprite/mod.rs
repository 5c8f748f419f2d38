// TABLE:
// ┌──────────────────────────────────────────────────────────────────────────┐
// │                           Sprite Kinds                                   │
// ├────────────┬──────────────────────────┬──────────────────────────────────┤
// │ Sprite     │ Motion per frame         │ Lifetime                         │
// ├────────────┼──────────────────────────┼──────────────────────────────────┤
// │ Asset      │ Euler : vel += acc       │ whole session, hidden or moved   │
// │            │         pos += vel       │ but never dropped                │
// │            │ rot += rot_speed * dt    │                                  │
// ├────────────┼──────────────────────────┼──────────────────────────────────┤
// │ Laser      │ y -= speed * dt          │ fire key -> until above y = -10  │
// ├────────────┼──────────────────────────┼──────────────────────────────────┤
// │ Star       │ y += speed * radius * dt │ fixed pool, recycled at the top  │
// └────────────┴──────────────────────────┴──────────────────────────────────┘
// - dt is the elapsed frame time in milliseconds
// - Asset velocity and acceleration are per frame, NOT scaled by dt
pub mod asset;
pub mod laser;
pub mod star;

pub use asset::Asset;
pub use laser::Laser;
pub use star::Star;
