//! Named icons of the standard Blender 2.6 icon sheet.
//!
//! Each id is the icon's `(column, row)` cell, row 0 at the bottom of the sheet.

use crate::icons::IconId;

pub const NONE: IconId = IconId::new(0, 29);
pub const QUESTION: IconId = IconId::new(1, 29);
pub const ERROR: IconId = IconId::new(2, 29);
pub const CANCEL: IconId = IconId::new(3, 29);
pub const TRIA_RIGHT: IconId = IconId::new(4, 29);
pub const TRIA_DOWN: IconId = IconId::new(5, 29);
pub const TRIA_LEFT: IconId = IconId::new(6, 29);
pub const TRIA_UP: IconId = IconId::new(7, 29);
pub const ARROW_LEFTRIGHT: IconId = IconId::new(8, 29);
pub const PLUS: IconId = IconId::new(9, 29);
pub const DISCLOSURE_TRI_DOWN: IconId = IconId::new(10, 29);
pub const DISCLOSURE_TRI_RIGHT: IconId = IconId::new(11, 29);
pub const RADIOBUT_OFF: IconId = IconId::new(12, 29);
pub const RADIOBUT_ON: IconId = IconId::new(13, 29);
pub const MENU_PANEL: IconId = IconId::new(14, 29);
pub const BLENDER: IconId = IconId::new(15, 29);
pub const GRIP: IconId = IconId::new(16, 29);
pub const DOT: IconId = IconId::new(17, 29);
pub const COLLAPSEMENU: IconId = IconId::new(18, 29);
pub const X: IconId = IconId::new(19, 29);
pub const GO_LEFT: IconId = IconId::new(21, 29);
pub const PLUG: IconId = IconId::new(22, 29);
pub const UI: IconId = IconId::new(23, 29);
pub const NODE: IconId = IconId::new(24, 29);
pub const NODE_SEL: IconId = IconId::new(25, 29);
pub const FULLSCREEN: IconId = IconId::new(0, 28);
pub const SPLITSCREEN: IconId = IconId::new(1, 28);
pub const RIGHTARROW_THIN: IconId = IconId::new(2, 28);
pub const BORDERMOVE: IconId = IconId::new(3, 28);
pub const VIEWZOOM: IconId = IconId::new(4, 28);
pub const ZOOMIN: IconId = IconId::new(5, 28);
pub const ZOOMOUT: IconId = IconId::new(6, 28);
pub const PANEL_CLOSE: IconId = IconId::new(7, 28);
pub const COPY_ID: IconId = IconId::new(8, 28);
pub const EYEDROPPER: IconId = IconId::new(9, 28);
pub const LINK_AREA: IconId = IconId::new(10, 28);
pub const AUTO: IconId = IconId::new(11, 28);
pub const CHECKBOX_DEHLT: IconId = IconId::new(12, 28);
pub const CHECKBOX_HLT: IconId = IconId::new(13, 28);
pub const UNLOCKED: IconId = IconId::new(14, 28);
pub const LOCKED: IconId = IconId::new(15, 28);
pub const UNPINNED: IconId = IconId::new(16, 28);
pub const PINNED: IconId = IconId::new(17, 28);
pub const SCREEN_BACK: IconId = IconId::new(18, 28);
pub const RIGHTARROW: IconId = IconId::new(19, 28);
pub const DOWNARROW_HLT: IconId = IconId::new(20, 28);
pub const DOTSUP: IconId = IconId::new(21, 28);
pub const DOTSDOWN: IconId = IconId::new(22, 28);
pub const LINK: IconId = IconId::new(23, 28);
pub const INLINK: IconId = IconId::new(24, 28);
pub const PLUGIN: IconId = IconId::new(25, 28);
pub const HELP: IconId = IconId::new(0, 27);
pub const GHOST_ENABLED: IconId = IconId::new(1, 27);
pub const COLOR: IconId = IconId::new(2, 27);
pub const LINKED: IconId = IconId::new(3, 27);
pub const UNLINKED: IconId = IconId::new(4, 27);
pub const HAND: IconId = IconId::new(5, 27);
pub const ZOOM_ALL: IconId = IconId::new(6, 27);
pub const ZOOM_SELECTED: IconId = IconId::new(7, 27);
pub const ZOOM_PREVIOUS: IconId = IconId::new(8, 27);
pub const ZOOM_IN: IconId = IconId::new(9, 27);
pub const ZOOM_OUT: IconId = IconId::new(10, 27);
pub const RENDER_REGION: IconId = IconId::new(11, 27);
pub const BORDER_RECT: IconId = IconId::new(12, 27);
pub const BORDER_LASSO: IconId = IconId::new(13, 27);
pub const FREEZE: IconId = IconId::new(14, 27);
pub const STYLUS_PRESSURE: IconId = IconId::new(15, 27);
pub const GHOST_DISABLED: IconId = IconId::new(16, 27);
pub const NEW: IconId = IconId::new(17, 27);
pub const FILE_TICK: IconId = IconId::new(18, 27);
pub const QUIT: IconId = IconId::new(19, 27);
pub const URL: IconId = IconId::new(20, 27);
pub const RECOVER_LAST: IconId = IconId::new(21, 27);
pub const FULLSCREEN_ENTER: IconId = IconId::new(23, 27);
pub const FULLSCREEN_EXIT: IconId = IconId::new(24, 27);
pub const BLANK1: IconId = IconId::new(25, 27);
pub const LAMP: IconId = IconId::new(0, 26);
pub const MATERIAL: IconId = IconId::new(1, 26);
pub const TEXTURE: IconId = IconId::new(2, 26);
pub const ANIM: IconId = IconId::new(3, 26);
pub const WORLD: IconId = IconId::new(4, 26);
pub const SCENE: IconId = IconId::new(5, 26);
pub const EDIT: IconId = IconId::new(6, 26);
pub const GAME: IconId = IconId::new(7, 26);
pub const RADIO: IconId = IconId::new(8, 26);
pub const SCRIPT: IconId = IconId::new(9, 26);
pub const PARTICLES: IconId = IconId::new(10, 26);
pub const PHYSICS: IconId = IconId::new(11, 26);
pub const SPEAKER: IconId = IconId::new(12, 26);
pub const TEXTURE_SHADED: IconId = IconId::new(13, 26);
pub const VIEW3D: IconId = IconId::new(0, 25);
pub const IPO: IconId = IconId::new(1, 25);
pub const OOPS: IconId = IconId::new(2, 25);
pub const BUTS: IconId = IconId::new(3, 25);
pub const FILESEL: IconId = IconId::new(4, 25);
pub const IMAGE_COL: IconId = IconId::new(5, 25);
pub const INFO: IconId = IconId::new(6, 25);
pub const SEQUENCE: IconId = IconId::new(7, 25);
pub const TEXT: IconId = IconId::new(8, 25);
pub const IMASEL: IconId = IconId::new(9, 25);
pub const SOUND: IconId = IconId::new(10, 25);
pub const ACTION: IconId = IconId::new(11, 25);
pub const NLA: IconId = IconId::new(12, 25);
pub const SCRIPTWIN: IconId = IconId::new(13, 25);
pub const TIME: IconId = IconId::new(14, 25);
pub const NODETREE: IconId = IconId::new(15, 25);
pub const LOGIC: IconId = IconId::new(16, 25);
pub const CONSOLE: IconId = IconId::new(17, 25);
pub const PREFERENCES: IconId = IconId::new(18, 25);
pub const CLIP: IconId = IconId::new(19, 25);
pub const ASSET_MANAGER: IconId = IconId::new(20, 25);
pub const OBJECT_DATAMODE: IconId = IconId::new(0, 24);
pub const EDITMODE_HLT: IconId = IconId::new(1, 24);
pub const FACESEL_HLT: IconId = IconId::new(2, 24);
pub const VPAINT_HLT: IconId = IconId::new(3, 24);
pub const TPAINT_HLT: IconId = IconId::new(4, 24);
pub const WPAINT_HLT: IconId = IconId::new(5, 24);
pub const SCULPTMODE_HLT: IconId = IconId::new(6, 24);
pub const POSE_HLT: IconId = IconId::new(7, 24);
pub const PARTICLEMODE: IconId = IconId::new(8, 24);
pub const LIGHTPAINT: IconId = IconId::new(9, 24);
pub const SCENE_DATA: IconId = IconId::new(0, 23);
pub const RENDERLAYERS: IconId = IconId::new(1, 23);
pub const WORLD_DATA: IconId = IconId::new(2, 23);
pub const OBJECT_DATA: IconId = IconId::new(3, 23);
pub const MESH_DATA: IconId = IconId::new(4, 23);
pub const CURVE_DATA: IconId = IconId::new(5, 23);
pub const META_DATA: IconId = IconId::new(6, 23);
pub const LATTICE_DATA: IconId = IconId::new(7, 23);
pub const LAMP_DATA: IconId = IconId::new(8, 23);
pub const MATERIAL_DATA: IconId = IconId::new(9, 23);
pub const TEXTURE_DATA: IconId = IconId::new(10, 23);
pub const ANIM_DATA: IconId = IconId::new(11, 23);
pub const CAMERA_DATA: IconId = IconId::new(12, 23);
pub const PARTICLE_DATA: IconId = IconId::new(13, 23);
pub const LIBRARY_DATA_DIRECT: IconId = IconId::new(14, 23);
pub const GROUP: IconId = IconId::new(15, 23);
pub const ARMATURE_DATA: IconId = IconId::new(16, 23);
pub const POSE_DATA: IconId = IconId::new(17, 23);
pub const BONE_DATA: IconId = IconId::new(18, 23);
pub const CONSTRAINT: IconId = IconId::new(19, 23);
pub const SHAPEKEY_DATA: IconId = IconId::new(20, 23);
pub const CONSTRAINT_BONE: IconId = IconId::new(21, 23);
pub const CAMERA_STEREO: IconId = IconId::new(22, 23);
pub const PACKAGE: IconId = IconId::new(23, 23);
pub const UGLYPACKAGE: IconId = IconId::new(24, 23);
pub const BRUSH_DATA: IconId = IconId::new(0, 22);
pub const IMAGE_DATA: IconId = IconId::new(1, 22);
pub const FILE: IconId = IconId::new(2, 22);
pub const FCURVE: IconId = IconId::new(3, 22);
pub const FONT_DATA: IconId = IconId::new(4, 22);
pub const RENDER_RESULT: IconId = IconId::new(5, 22);
pub const SURFACE_DATA: IconId = IconId::new(6, 22);
pub const EMPTY_DATA: IconId = IconId::new(7, 22);
pub const SETTINGS: IconId = IconId::new(8, 22);
pub const RENDER_ANIMATION: IconId = IconId::new(9, 22);
pub const RENDER_STILL: IconId = IconId::new(10, 22);
pub const BOIDS: IconId = IconId::new(12, 22);
pub const STRANDS: IconId = IconId::new(13, 22);
pub const LIBRARY_DATA_INDIRECT: IconId = IconId::new(14, 22);
pub const GREASEPENCIL: IconId = IconId::new(15, 22);
pub const LINE_DATA: IconId = IconId::new(16, 22);
pub const GROUP_BONE: IconId = IconId::new(18, 22);
pub const GROUP_VERTEX: IconId = IconId::new(19, 22);
pub const GROUP_VCOL: IconId = IconId::new(20, 22);
pub const GROUP_UVS: IconId = IconId::new(21, 22);
pub const RNA: IconId = IconId::new(24, 22);
pub const RNA_ADD: IconId = IconId::new(25, 22);
pub const OUTLINER_OB_EMPTY: IconId = IconId::new(0, 20);
pub const OUTLINER_OB_MESH: IconId = IconId::new(1, 20);
pub const OUTLINER_OB_CURVE: IconId = IconId::new(2, 20);
pub const OUTLINER_OB_LATTICE: IconId = IconId::new(3, 20);
pub const OUTLINER_OB_META: IconId = IconId::new(4, 20);
pub const OUTLINER_OB_LAMP: IconId = IconId::new(5, 20);
pub const OUTLINER_OB_CAMERA: IconId = IconId::new(6, 20);
pub const OUTLINER_OB_ARMATURE: IconId = IconId::new(7, 20);
pub const OUTLINER_OB_FONT: IconId = IconId::new(8, 20);
pub const OUTLINER_OB_SURFACE: IconId = IconId::new(9, 20);
pub const OUTLINER_OB_SPEAKER: IconId = IconId::new(10, 20);
pub const RESTRICT_VIEW_OFF: IconId = IconId::new(19, 20);
pub const RESTRICT_VIEW_ON: IconId = IconId::new(20, 20);
pub const RESTRICT_SELECT_OFF: IconId = IconId::new(21, 20);
pub const RESTRICT_SELECT_ON: IconId = IconId::new(22, 20);
pub const RESTRICT_RENDER_OFF: IconId = IconId::new(23, 20);
pub const RESTRICT_RENDER_ON: IconId = IconId::new(24, 20);
pub const OUTLINER_DATA_EMPTY: IconId = IconId::new(0, 19);
pub const OUTLINER_DATA_MESH: IconId = IconId::new(1, 19);
pub const OUTLINER_DATA_CURVE: IconId = IconId::new(2, 19);
pub const OUTLINER_DATA_LATTICE: IconId = IconId::new(3, 19);
pub const OUTLINER_DATA_META: IconId = IconId::new(4, 19);
pub const OUTLINER_DATA_LAMP: IconId = IconId::new(5, 19);
pub const OUTLINER_DATA_CAMERA: IconId = IconId::new(6, 19);
pub const OUTLINER_DATA_ARMATURE: IconId = IconId::new(7, 19);
pub const OUTLINER_DATA_FONT: IconId = IconId::new(8, 19);
pub const OUTLINER_DATA_SURFACE: IconId = IconId::new(9, 19);
pub const OUTLINER_DATA_SPEAKER: IconId = IconId::new(10, 19);
pub const OUTLINER_DATA_POSE: IconId = IconId::new(11, 19);
pub const MESH_PLANE: IconId = IconId::new(0, 18);
pub const MESH_CUBE: IconId = IconId::new(1, 18);
pub const MESH_CIRCLE: IconId = IconId::new(2, 18);
pub const MESH_UVSPHERE: IconId = IconId::new(3, 18);
pub const MESH_ICOSPHERE: IconId = IconId::new(4, 18);
pub const MESH_GRID: IconId = IconId::new(5, 18);
pub const MESH_MONKEY: IconId = IconId::new(6, 18);
pub const MESH_CYLINDER: IconId = IconId::new(7, 18);
pub const MESH_TORUS: IconId = IconId::new(8, 18);
pub const MESH_CONE: IconId = IconId::new(9, 18);
pub const LAMP_POINT: IconId = IconId::new(12, 18);
pub const LAMP_SUN: IconId = IconId::new(13, 18);
pub const LAMP_SPOT: IconId = IconId::new(14, 18);
pub const LAMP_HEMI: IconId = IconId::new(15, 18);
pub const LAMP_AREA: IconId = IconId::new(16, 18);
pub const META_EMPTY: IconId = IconId::new(19, 18);
pub const META_PLANE: IconId = IconId::new(20, 18);
pub const META_CUBE: IconId = IconId::new(21, 18);
pub const META_BALL: IconId = IconId::new(22, 18);
pub const META_ELLIPSOID: IconId = IconId::new(23, 18);
pub const META_CAPSULE: IconId = IconId::new(24, 18);
pub const SURFACE_NCURVE: IconId = IconId::new(0, 17);
pub const SURFACE_NCIRCLE: IconId = IconId::new(1, 17);
pub const SURFACE_NSURFACE: IconId = IconId::new(2, 17);
pub const SURFACE_NCYLINDER: IconId = IconId::new(3, 17);
pub const SURFACE_NSPHERE: IconId = IconId::new(4, 17);
pub const SURFACE_NTORUS: IconId = IconId::new(5, 17);
pub const CURVE_BEZCURVE: IconId = IconId::new(9, 17);
pub const CURVE_BEZCIRCLE: IconId = IconId::new(10, 17);
pub const CURVE_NCURVE: IconId = IconId::new(11, 17);
pub const CURVE_NCIRCLE: IconId = IconId::new(12, 17);
pub const CURVE_PATH: IconId = IconId::new(13, 17);
pub const COLOR_RED: IconId = IconId::new(19, 17);
pub const COLOR_GREEN: IconId = IconId::new(20, 17);
pub const COLOR_BLUE: IconId = IconId::new(21, 17);
pub const FORCE_FORCE: IconId = IconId::new(0, 16);
pub const FORCE_WIND: IconId = IconId::new(1, 16);
pub const FORCE_VORTEX: IconId = IconId::new(2, 16);
pub const FORCE_MAGNETIC: IconId = IconId::new(3, 16);
pub const FORCE_HARMONIC: IconId = IconId::new(4, 16);
pub const FORCE_CHARGE: IconId = IconId::new(5, 16);
pub const FORCE_LENNARDJONES: IconId = IconId::new(6, 16);
pub const FORCE_TEXTURE: IconId = IconId::new(7, 16);
pub const FORCE_CURVE: IconId = IconId::new(8, 16);
pub const FORCE_BOID: IconId = IconId::new(9, 16);
pub const FORCE_TURBULENCE: IconId = IconId::new(10, 16);
pub const FORCE_DRAG: IconId = IconId::new(11, 16);
pub const FORCE_SMOKEFLOW: IconId = IconId::new(12, 16);
pub const MODIFIER: IconId = IconId::new(0, 12);
pub const MOD_WAVE: IconId = IconId::new(1, 12);
pub const MOD_BUILD: IconId = IconId::new(2, 12);
pub const MOD_DECIM: IconId = IconId::new(3, 12);
pub const MOD_MIRROR: IconId = IconId::new(4, 12);
pub const MOD_SOFT: IconId = IconId::new(5, 12);
pub const MOD_SUBSURF: IconId = IconId::new(6, 12);
pub const HOOK: IconId = IconId::new(7, 12);
pub const MOD_PHYSICS: IconId = IconId::new(8, 12);
pub const MOD_PARTICLES: IconId = IconId::new(9, 12);
pub const MOD_BOOLEAN: IconId = IconId::new(10, 12);
pub const MOD_EDGESPLIT: IconId = IconId::new(11, 12);
pub const MOD_ARRAY: IconId = IconId::new(12, 12);
pub const MOD_UVPROJECT: IconId = IconId::new(13, 12);
pub const MOD_DISPLACE: IconId = IconId::new(14, 12);
pub const MOD_CURVE: IconId = IconId::new(15, 12);
pub const MOD_LATTICE: IconId = IconId::new(16, 12);
pub const CONSTRAINT_DATA: IconId = IconId::new(17, 12);
pub const MOD_ARMATURE: IconId = IconId::new(18, 12);
pub const MOD_SHRINKWRAP: IconId = IconId::new(19, 12);
pub const MOD_CAST: IconId = IconId::new(20, 12);
pub const MOD_MESHDEFORM: IconId = IconId::new(21, 12);
pub const MOD_BEVEL: IconId = IconId::new(22, 12);
pub const MOD_SMOOTH: IconId = IconId::new(23, 12);
pub const MOD_SIMPLEDEFORM: IconId = IconId::new(24, 12);
pub const MOD_MASK: IconId = IconId::new(25, 12);
pub const MOD_CLOTH: IconId = IconId::new(0, 11);
pub const MOD_EXPLODE: IconId = IconId::new(1, 11);
pub const MOD_FLUIDSIM: IconId = IconId::new(2, 11);
pub const MOD_MULTIRES: IconId = IconId::new(3, 11);
pub const MOD_SMOKE: IconId = IconId::new(4, 11);
pub const MOD_SOLIDIFY: IconId = IconId::new(5, 11);
pub const MOD_SCREW: IconId = IconId::new(6, 11);
pub const MOD_VERTEX_WEIGHT: IconId = IconId::new(7, 11);
pub const MOD_DYNAMICPAINT: IconId = IconId::new(8, 11);
pub const MOD_REMESH: IconId = IconId::new(9, 11);
pub const MOD_OCEAN: IconId = IconId::new(10, 11);
pub const MOD_WARP: IconId = IconId::new(11, 11);
pub const MOD_SKIN: IconId = IconId::new(12, 11);
pub const MOD_TRIANGULATE: IconId = IconId::new(13, 11);
pub const MOD_WIREFRAME: IconId = IconId::new(14, 11);
pub const REC: IconId = IconId::new(0, 10);
pub const PLAY: IconId = IconId::new(1, 10);
pub const FF: IconId = IconId::new(2, 10);
pub const REW: IconId = IconId::new(3, 10);
pub const PAUSE: IconId = IconId::new(4, 10);
pub const PREV_KEYFRAME: IconId = IconId::new(5, 10);
pub const NEXT_KEYFRAME: IconId = IconId::new(6, 10);
pub const PLAY_AUDIO: IconId = IconId::new(7, 10);
pub const PLAY_REVERSE: IconId = IconId::new(8, 10);
pub const PREVIEW_RANGE: IconId = IconId::new(9, 10);
pub const ACTION_TWEAK: IconId = IconId::new(10, 10);
pub const PMARKER_ACT: IconId = IconId::new(11, 10);
pub const PMARKER_SEL: IconId = IconId::new(12, 10);
pub const PMARKER: IconId = IconId::new(13, 10);
pub const MARKER_HLT: IconId = IconId::new(14, 10);
pub const MARKER: IconId = IconId::new(15, 10);
pub const SPACE2: IconId = IconId::new(16, 10);
pub const SPACE3: IconId = IconId::new(17, 10);
pub const KEYINGSET: IconId = IconId::new(18, 10);
pub const KEY_DEHLT: IconId = IconId::new(19, 10);
pub const KEY_HLT: IconId = IconId::new(20, 10);
pub const MUTE_IPO_OFF: IconId = IconId::new(21, 10);
pub const MUTE_IPO_ON: IconId = IconId::new(22, 10);
pub const VISIBLE_IPO_OFF: IconId = IconId::new(23, 10);
pub const VISIBLE_IPO_ON: IconId = IconId::new(24, 10);
pub const DRIVER: IconId = IconId::new(25, 10);
pub const SOLO_OFF: IconId = IconId::new(0, 9);
pub const SOLO_ON: IconId = IconId::new(1, 9);
pub const FRAME_PREV: IconId = IconId::new(2, 9);
pub const FRAME_NEXT: IconId = IconId::new(3, 9);
pub const NLA_PUSHDOWN: IconId = IconId::new(4, 9);
pub const IPO_CONSTANT: IconId = IconId::new(5, 9);
pub const IPO_LINEAR: IconId = IconId::new(6, 9);
pub const IPO_BEZIER: IconId = IconId::new(7, 9);
pub const IPO_SINE: IconId = IconId::new(8, 9);
pub const IPO_QUAD: IconId = IconId::new(9, 9);
pub const IPO_CUBIC: IconId = IconId::new(10, 9);
pub const IPO_QUART: IconId = IconId::new(11, 9);
pub const IPO_QUINT: IconId = IconId::new(12, 9);
pub const IPO_EXPO: IconId = IconId::new(13, 9);
pub const IPO_CIRC: IconId = IconId::new(14, 9);
pub const IPO_BOUNCE: IconId = IconId::new(15, 9);
pub const IPO_ELASTIC: IconId = IconId::new(16, 9);
pub const IPO_BACK: IconId = IconId::new(17, 9);
pub const IPO_EASE_IN: IconId = IconId::new(18, 9);
pub const IPO_EASE_OUT: IconId = IconId::new(19, 9);
pub const IPO_EASE_IN_OUT: IconId = IconId::new(20, 9);
pub const VERTEXSEL: IconId = IconId::new(0, 8);
pub const EDGESEL: IconId = IconId::new(1, 8);
pub const FACESEL: IconId = IconId::new(2, 8);
pub const LOOPSEL: IconId = IconId::new(3, 8);
pub const ROTATE: IconId = IconId::new(5, 8);
pub const CURSOR: IconId = IconId::new(6, 8);
pub const ROTATECOLLECTION: IconId = IconId::new(7, 8);
pub const ROTATECENTER: IconId = IconId::new(8, 8);
pub const ROTACTIVE: IconId = IconId::new(9, 8);
pub const ALIGN: IconId = IconId::new(10, 8);
pub const SMOOTHCURVE: IconId = IconId::new(12, 8);
pub const SPHERECURVE: IconId = IconId::new(13, 8);
pub const ROOTCURVE: IconId = IconId::new(14, 8);
pub const SHARPCURVE: IconId = IconId::new(15, 8);
pub const LINCURVE: IconId = IconId::new(16, 8);
pub const NOCURVE: IconId = IconId::new(17, 8);
pub const RNDCURVE: IconId = IconId::new(18, 8);
pub const PROP_OFF: IconId = IconId::new(19, 8);
pub const PROP_ON: IconId = IconId::new(20, 8);
pub const PROP_CON: IconId = IconId::new(21, 8);
pub const SCULPT_DYNTOPO: IconId = IconId::new(22, 8);
pub const PARTICLE_POINT: IconId = IconId::new(23, 8);
pub const PARTICLE_TIP: IconId = IconId::new(24, 8);
pub const PARTICLE_PATH: IconId = IconId::new(25, 8);
pub const MAN_TRANS: IconId = IconId::new(0, 7);
pub const MAN_ROT: IconId = IconId::new(1, 7);
pub const MAN_SCALE: IconId = IconId::new(2, 7);
pub const MANIPUL: IconId = IconId::new(3, 7);
pub const SNAP_OFF: IconId = IconId::new(4, 7);
pub const SNAP_ON: IconId = IconId::new(5, 7);
pub const SNAP_NORMAL: IconId = IconId::new(6, 7);
pub const SNAP_INCREMENT: IconId = IconId::new(7, 7);
pub const SNAP_VERTEX: IconId = IconId::new(8, 7);
pub const SNAP_EDGE: IconId = IconId::new(9, 7);
pub const SNAP_FACE: IconId = IconId::new(10, 7);
pub const SNAP_VOLUME: IconId = IconId::new(11, 7);
pub const STICKY_UVS_LOC: IconId = IconId::new(13, 7);
pub const STICKY_UVS_DISABLE: IconId = IconId::new(14, 7);
pub const STICKY_UVS_VERT: IconId = IconId::new(15, 7);
pub const CLIPUV_DEHLT: IconId = IconId::new(16, 7);
pub const CLIPUV_HLT: IconId = IconId::new(17, 7);
pub const SNAP_PEEL_OBJECT: IconId = IconId::new(18, 7);
pub const GRID: IconId = IconId::new(19, 7);
pub const PASTEDOWN: IconId = IconId::new(0, 6);
pub const COPYDOWN: IconId = IconId::new(1, 6);
pub const PASTEFLIPUP: IconId = IconId::new(2, 6);
pub const PASTEFLIPDOWN: IconId = IconId::new(3, 6);
pub const SNAP_SURFACE: IconId = IconId::new(8, 6);
pub const AUTOMERGE_ON: IconId = IconId::new(9, 6);
pub const AUTOMERGE_OFF: IconId = IconId::new(10, 6);
pub const RETOPO: IconId = IconId::new(11, 6);
pub const UV_VERTEXSEL: IconId = IconId::new(12, 6);
pub const UV_EDGESEL: IconId = IconId::new(13, 6);
pub const UV_FACESEL: IconId = IconId::new(14, 6);
pub const UV_ISLANDSEL: IconId = IconId::new(15, 6);
pub const UV_SYNC_SELECT: IconId = IconId::new(16, 6);
pub const BBOX: IconId = IconId::new(0, 5);
pub const WIRE: IconId = IconId::new(1, 5);
pub const SOLID: IconId = IconId::new(2, 5);
pub const SMOOTH: IconId = IconId::new(3, 5);
pub const POTATO: IconId = IconId::new(4, 5);
pub const ORTHO: IconId = IconId::new(6, 5);
pub const LOCKVIEW_OFF: IconId = IconId::new(9, 5);
pub const LOCKVIEW_ON: IconId = IconId::new(10, 5);
pub const AXIS_SIDE: IconId = IconId::new(12, 5);
pub const AXIS_FRONT: IconId = IconId::new(13, 5);
pub const AXIS_TOP: IconId = IconId::new(14, 5);
pub const NDOF_DOM: IconId = IconId::new(15, 5);
pub const NDOF_TURN: IconId = IconId::new(16, 5);
pub const NDOF_FLY: IconId = IconId::new(17, 5);
pub const NDOF_TRANS: IconId = IconId::new(18, 5);
pub const LAYER_USED: IconId = IconId::new(19, 5);
pub const LAYER_ACTIVE: IconId = IconId::new(20, 5);
pub const SORTALPHA: IconId = IconId::new(0, 3);
pub const SORTBYEXT: IconId = IconId::new(1, 3);
pub const SORTTIME: IconId = IconId::new(2, 3);
pub const SORTSIZE: IconId = IconId::new(3, 3);
pub const LONGDISPLAY: IconId = IconId::new(4, 3);
pub const SHORTDISPLAY: IconId = IconId::new(5, 3);
pub const GHOST: IconId = IconId::new(6, 3);
pub const IMGDISPLAY: IconId = IconId::new(7, 3);
pub const SAVE_AS: IconId = IconId::new(8, 3);
pub const SAVE_COPY: IconId = IconId::new(9, 3);
pub const BOOKMARKS: IconId = IconId::new(10, 3);
pub const FONTPREVIEW: IconId = IconId::new(11, 3);
pub const FILTER: IconId = IconId::new(12, 3);
pub const NEWFOLDER: IconId = IconId::new(13, 3);
pub const OPEN_RECENT: IconId = IconId::new(14, 3);
pub const FILE_PARENT: IconId = IconId::new(15, 3);
pub const FILE_REFRESH: IconId = IconId::new(16, 3);
pub const FILE_FOLDER: IconId = IconId::new(17, 3);
pub const FILE_BLANK: IconId = IconId::new(18, 3);
pub const FILE_BLEND: IconId = IconId::new(19, 3);
pub const FILE_IMAGE: IconId = IconId::new(20, 3);
pub const FILE_MOVIE: IconId = IconId::new(21, 3);
pub const FILE_SCRIPT: IconId = IconId::new(22, 3);
pub const FILE_SOUND: IconId = IconId::new(23, 3);
pub const FILE_FONT: IconId = IconId::new(24, 3);
pub const FILE_TEXT: IconId = IconId::new(25, 3);
pub const RECOVER_AUTO: IconId = IconId::new(0, 2);
pub const SAVE_PREFS: IconId = IconId::new(1, 2);
pub const LINK_BLEND: IconId = IconId::new(2, 2);
pub const APPEND_BLEND: IconId = IconId::new(3, 2);
pub const IMPORT: IconId = IconId::new(4, 2);
pub const EXPORT: IconId = IconId::new(5, 2);
pub const EXTERNAL_DATA: IconId = IconId::new(6, 2);
pub const LOAD_FACTORY: IconId = IconId::new(7, 2);
pub const LOOP_BACK: IconId = IconId::new(13, 2);
pub const LOOP_FORWARDS: IconId = IconId::new(14, 2);
pub const BACK: IconId = IconId::new(15, 2);
pub const FORWARD: IconId = IconId::new(16, 2);
pub const FILE_BACKUP: IconId = IconId::new(24, 2);
pub const DISK_DRIVE: IconId = IconId::new(25, 2);
pub const MATPLANE: IconId = IconId::new(0, 1);
pub const MATSPHERE: IconId = IconId::new(1, 1);
pub const MATCUBE: IconId = IconId::new(2, 1);
pub const MONKEY: IconId = IconId::new(3, 1);
pub const HAIR: IconId = IconId::new(4, 1);
pub const ALIASED: IconId = IconId::new(5, 1);
pub const ANTIALIASED: IconId = IconId::new(6, 1);
pub const MAT_SPHERE_SKY: IconId = IconId::new(7, 1);
pub const WORDWRAP_OFF: IconId = IconId::new(12, 1);
pub const WORDWRAP_ON: IconId = IconId::new(13, 1);
pub const SYNTAX_OFF: IconId = IconId::new(14, 1);
pub const SYNTAX_ON: IconId = IconId::new(15, 1);
pub const LINENUMBERS_OFF: IconId = IconId::new(16, 1);
pub const LINENUMBERS_ON: IconId = IconId::new(17, 1);
pub const SCRIPTPLUGINS: IconId = IconId::new(18, 1);
pub const SEQ_SEQUENCER: IconId = IconId::new(0, 0);
pub const SEQ_PREVIEW: IconId = IconId::new(1, 0);
pub const SEQ_LUMA_WAVEFORM: IconId = IconId::new(2, 0);
pub const SEQ_CHROMA_SCOPE: IconId = IconId::new(3, 0);
pub const SEQ_HISTOGRAM: IconId = IconId::new(4, 0);
pub const SEQ_SPLITVIEW: IconId = IconId::new(5, 0);
pub const IMAGE_RGB: IconId = IconId::new(9, 0);
pub const IMAGE_RGB_ALPHA: IconId = IconId::new(10, 0);
pub const IMAGE_ALPHA: IconId = IconId::new(11, 0);
pub const IMAGE_ZDEPTH: IconId = IconId::new(12, 0);
pub const IMAGEFILE: IconId = IconId::new(13, 0);
