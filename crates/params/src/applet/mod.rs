//! Constants for the key agreement applet command protocol

/// Version identifier returned on selection
pub const VERSION_NUMBER: u16 = 0x5519;

/// Default application identifier
pub const DEFAULT_AID: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

/// Minimum application identifier length in bytes
pub const AID_MIN_SIZE: usize = 5;

/// Maximum application identifier length in bytes
pub const AID_MAX_SIZE: usize = 16;

/// Instruction: generate a keypair on the element
pub const INS_GENERATE_KEYPAIR: u8 = 0x01;

/// Instruction: load a caller-supplied private key
pub const INS_LOAD_PRIVATE_KEY: u8 = 0x02;

/// Instruction: compute a shared secret against the loaded key
pub const INS_COMPUTE_SHARED_SECRET: u8 = 0x03;

/// Size of a private scalar in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of a single coordinate in bytes
pub const COORDINATE_SIZE: usize = 32;

/// Size of a public point on the wire (x ∥ y, no format marker)
pub const PUBLIC_POINT_SIZE: usize = 2 * COORDINATE_SIZE;

/// Uncompressed point format marker
pub const POINT_FORMAT_UNCOMPRESSED: u8 = 0x04;

/// Size of the shared secret (x-coordinate) in bytes
pub const SHARED_SECRET_SIZE: usize = COORDINATE_SIZE;

/// Size of a status code body
pub const STATUS_SIZE: usize = 2;

/// Size of the transient scratchpad
pub const SCRATCHPAD_SIZE: usize = 128;

/// Status reported for a fault that is neither a protocol nor an engine error
pub const INTERNAL_FAULT: u16 = 0xEEEE;
